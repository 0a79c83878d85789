use std::fmt;

/// The closed set of actions a chat message can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Allow,
    SwapForward,
    SwapBackward,
    ProvideLiquidity,
    RemoveLiquidity,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Allow,
        Intent::SwapForward,
        Intent::SwapBackward,
        Intent::ProvideLiquidity,
        Intent::RemoveLiquidity,
    ];

    /// Candidate label scored by the zero-shot classifier.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Allow => "allow",
            Intent::SwapForward => "swap mir",
            Intent::SwapBackward => "swap clk",
            Intent::ProvideLiquidity => "provide liquidity",
            Intent::RemoveLiquidity => "remove liquidity",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.label() == label)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
