use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum SkeletonShape {
    #[default]
    Text,
    Circular,
    Rectangular,
}

impl SkeletonShape {
    fn class(&self) -> &'static str {
        match self {
            SkeletonShape::Text => "skeleton-text h-4",
            SkeletonShape::Circular => "rounded-full shrink-0",
            SkeletonShape::Rectangular => "rounded",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or_default]
    pub shape: SkeletonShape,
    /// CSS length, e.g. "80%" or "120px".
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub height: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder block shown while content is loading
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    let style = skeleton_style(props.width.as_deref(), props.height.as_deref());

    html! {
        <div class={classes!("skeleton", props.shape.class(), props.class.clone())} style={style}></div>
    }
}

fn skeleton_style(width: Option<&str>, height: Option<&str>) -> Option<String> {
    let mut style = String::new();
    if let Some(width) = width {
        style.push_str(&format!("width: {};", width));
    }
    if let Some(height) = height {
        style.push_str(&format!("height: {};", height));
    }
    (!style.is_empty()).then_some(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_style() {
        assert_eq!(skeleton_style(None, None), None);
        assert_eq!(
            skeleton_style(Some("80%"), None),
            Some("width: 80%;".to_string())
        );
        assert_eq!(
            skeleton_style(Some("28px"), Some("28px")),
            Some("width: 28px;height: 28px;".to_string())
        );
    }
}
