use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const PLAY: &str = "play";
    pub const PAUSE: &str = "pause";
    pub const VOLUME_ON: &str = "volume-on";
    pub const VOLUME_OFF: &str = "volume-off";
    pub const EXPAND: &str = "expand";
    pub const ARROW_RIGHT: &str = "arrow-right";
}
