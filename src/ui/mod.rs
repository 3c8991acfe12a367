pub mod accordion;
pub mod carousel;
pub mod icon;
pub mod media;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod social;
pub mod widget;

pub use accordion::FaqAccordion;
pub use carousel::{TestimonialCarousel, WorkSlider};
pub use icon::{Icon, icons};
pub use media::{HoverVideo, ShowreelPlayer};
pub use scroll::{ParallaxLayer, ScrollLinked, use_scroll_reveal};
pub use sections::{
    CtaBanner, Hero, PricingSection, SectionHeading, SeoMeta, SiteFooter, SiteHeader,
};
pub use social::{InstagramEmbed, SocialWall, TikTokEmbed};
pub use widget::{
    BookingButton, BookingInline, NewsletterForm, provide_site_settings, use_site_settings,
    use_widget_attacher,
};
