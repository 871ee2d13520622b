use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Error => "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            Self::Success => {
                "rounded-lg border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-700"
            }
        }
    }

    // Errors interrupt screen readers, confirmations wait their turn.
    const fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Success => "status",
        }
    }
}

/// Inline message banner. Messages are rendered as text, never as HTML.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    view! { <div class=kind.class() role=kind.role()>{message}</div> }
}
