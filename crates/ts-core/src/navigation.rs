use serde::{Deserialize, Serialize};

/// Screens the host can be told to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    TutorHome,
    StudentDetails,
}

impl Screen {
    /// Route name as registered in the host navigator.
    pub fn route_name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::TutorHome => "TutorHome",
            Screen::StudentDetails => "StudentDetails",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route_name())
    }
}
