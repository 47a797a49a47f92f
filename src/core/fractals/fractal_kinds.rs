use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKinds {
    #[default]
    Newton,
    Lyapunov,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Newton, Self::Lyapunov];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Newton => "Newton",
            Self::Lyapunov => "Lyapunov",
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
