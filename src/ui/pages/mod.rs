//! Page components, one per route
//!
//! - Home (index of the sites)
//! - Agency, with a page per work sample
//! - Brand
//! - Music
//! - AI clone product
//! - Coaching

mod agency;
mod brand;
mod clone;
mod coaching;
mod home;
mod music;
mod not_found;
mod work_detail;

pub use agency::AgencyPage;
pub use brand::BrandPage;
pub use clone::ClonePage;
pub use coaching::CoachingPage;
pub use home::HomePage;
pub use music::MusicPage;
pub use not_found::NotFoundPage;
pub use work_detail::WorkDetailPage;
