/// Browsing mode, derived from a tab's private flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BrowsingMode {
    #[default]
    Normal,
    Private,
}

impl BrowsingMode {
    pub fn from_private(private: bool) -> Self {
        if private {
            BrowsingMode::Private
        } else {
            BrowsingMode::Normal
        }
    }

    pub fn is_private(self) -> bool {
        self == BrowsingMode::Private
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_private() {
        assert_eq!(BrowsingMode::from_private(true), BrowsingMode::Private);
        assert_eq!(BrowsingMode::from_private(false), BrowsingMode::Normal);
        assert!(BrowsingMode::Private.is_private());
        assert_eq!(BrowsingMode::default(), BrowsingMode::Normal);
    }
}
