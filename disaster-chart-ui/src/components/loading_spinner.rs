use dioxus::prelude::*;

/// Placeholder while the dataset is being fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading disaster costs..."
        }
    }
}
