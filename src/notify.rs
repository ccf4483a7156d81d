//! Toast notifications.
//!
//! A minimal toast context: pages push success or error messages, the
//! viewport renders them, and each toast dismisses itself after a fixed
//! timeout.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// One on-screen notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast context.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    /// Show an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Reactive list of live toasts.
    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_DISMISS_AFTER,
        );
    }
}

/// Provide the toast context at the app root.
pub fn provide_toaster() {
    provide_context(Toaster::new());
}

/// Grab the toast context.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("toast context provided at app root")
}

/// Renders live toasts in a fixed overlay. Mounted once, at the app root.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            {move || {
                toaster
                    .toasts()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("toast toast--{}", toast.kind.as_str())>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
