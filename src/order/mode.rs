//! Operating modes of the mastering order pipeline.

/// The three mutually exclusive operating modes of an order.
///
/// The mode is chosen before data entry and is immutable once an export
/// begins. It decides which records are required, which validation path
/// runs, and which XML shape is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderMode {
    /// Full new-title submission: print book, optional e-book, optional
    /// international distribution.
    #[default]
    Upload,
    /// Attach international pricing to an existing title, identified only
    /// by its EAN.
    AddIntlDistribution,
    /// Attach an e-book variant to an existing printed title.
    AddEBook,
}

impl OrderMode {
    /// All modes, in the order the mode selector offers them.
    pub const ALL: [OrderMode; 3] = [
        OrderMode::Upload,
        OrderMode::AddIntlDistribution,
        OrderMode::AddEBook,
    ];

    /// The exact `MasteringType` element text for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMode::Upload => "Upload",
            OrderMode::AddIntlDistribution => "AddIntlDistribution",
            OrderMode::AddEBook => "AddEBook",
        }
    }

    /// Parse a mode from its `MasteringType` text.
    pub fn parse(s: &str) -> Option<OrderMode> {
        match s {
            "Upload" => Some(OrderMode::Upload),
            "AddIntlDistribution" => Some(OrderMode::AddIntlDistribution),
            "AddEBook" => Some(OrderMode::AddEBook),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_text_round_trip() {
        for mode in OrderMode::ALL {
            assert_eq!(OrderMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(OrderMode::parse("upload"), None);
        assert_eq!(OrderMode::parse(""), None);
    }
}
