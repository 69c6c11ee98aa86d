/// The three value slots of a bulk call: one for both collections, or one
/// per collection. `all` wins when it is set alongside an explicit slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Broadcast<T> {
    pub all: Option<T>,
    pub enclosures: Option<T>,
    pub items: Option<T>,
}

/// Per-collection values after `all` has been folded in.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    pub enclosures: Option<T>,
    pub items: Option<T>,
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self {
            all: None,
            enclosures: None,
            items: None,
        }
    }
}

impl<T> Broadcast<T> {
    pub fn all(value: T) -> Self {
        Self {
            all: Some(value),
            ..Self::default()
        }
    }

    pub fn items(value: T) -> Self {
        Self {
            items: Some(value),
            ..Self::default()
        }
    }

    pub fn enclosures(value: T) -> Self {
        Self {
            enclosures: Some(value),
            ..Self::default()
        }
    }

    pub fn with_items(mut self, value: T) -> Self {
        self.items = Some(value);
        self
    }

    pub fn with_enclosures(mut self, value: T) -> Self {
        self.enclosures = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_none() && self.enclosures.is_none() && self.items.is_none()
    }

    /// `all` set together with an explicit per-collection value.
    pub fn is_conflicting(&self) -> bool {
        self.all.is_some() && (self.enclosures.is_some() || self.items.is_some())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Broadcast<U> {
        Broadcast {
            all: self.all.map(&mut f),
            enclosures: self.enclosures.map(&mut f),
            items: self.items.map(&mut f),
        }
    }

    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<Broadcast<U>, E> {
        Ok(Broadcast {
            all: self.all.map(&mut f).transpose()?,
            enclosures: self.enclosures.map(&mut f).transpose()?,
            items: self.items.map(&mut f).transpose()?,
        })
    }

    /// Value for a single visual with no enclosure: `all`, else `items`.
    pub fn single(self) -> Option<T> {
        self.all.or(self.items)
    }
}

impl<T: Clone> Broadcast<T> {
    pub fn resolve(self) -> Resolved<T> {
        match self.all {
            Some(all) => Resolved {
                enclosures: Some(all.clone()),
                items: Some(all),
            },
            None => Resolved {
                enclosures: self.enclosures,
                items: self.items,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/broadcast.rs"]
mod tests;
