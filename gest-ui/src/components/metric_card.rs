//! Card wrapping a single dashboard metric.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    /// Card heading
    pub title: String,
    /// Optional caption shown under the value
    #[props(default = String::new())]
    pub caption: String,
    pub children: Element,
}

#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            class: "card",
            style: "flex: 1 1 220px; padding: 16px; background: #FFFFFF; border-radius: 8px; border: 1px solid #F0D9E0; box-shadow: 0 1px 3px rgba(0,0,0,0.06);",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 14px; color: #8E5A6B; text-transform: uppercase; letter-spacing: 0.5px;",
                "{props.title}"
            }
            {props.children}
            if !props.caption.is_empty() {
                p {
                    style: "margin: 8px 0 0 0; font-size: 12px; color: #888;",
                    "{props.caption}"
                }
            }
        }
    }
}
