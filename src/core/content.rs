//! Static copy for every site
//!
//! The sites are brochureware: all testimonials, questions, work samples and plans
//! live here as `'static` data and the pages simply map over them.

/// The independent sites served from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Agency,
    Brand,
    Music,
    Clone,
    Coaching,
}

impl Site {
    pub const ALL: [Site; 5] = [
        Site::Agency,
        Site::Brand,
        Site::Music,
        Site::Clone,
        Site::Coaching,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Site::Agency => "/agency",
            Site::Brand => "/brand",
            Site::Music => "/music",
            Site::Clone => "/clone",
            Site::Coaching => "/coaching",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Site::Agency => "Northlight Studio",
            Site::Brand => "Maya Okafor",
            Site::Music => "Juniper Vale",
            Site::Clone => "Echo",
            Site::Coaching => "Steady Ground Coaching",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Site::Agency => "Video-first brand studio for companies that hate boring ads",
            Site::Brand => "Writer, speaker and operator. Notes on building calm companies",
            Site::Music => "Dream-pop from a converted barn in the Catskills",
            Site::Clone => "An AI version of you that answers DMs in your voice",
            Site::Coaching => "Twelve weeks to a business that does not need you at 2am",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A portfolio piece with its own detail page under `/agency/work/<slug>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSample {
    pub slug: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub video: &'static str,
    pub poster: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [(&'static str, bool)],
    pub cta: &'static str,
    pub highlighted: bool,
}

pub const WORK: &[WorkSample] = &[
    WorkSample {
        slug: "harbor-coffee",
        title: "Slow Mornings",
        client: "Harbor Coffee Roasters",
        summary: "A six-spot campaign shot over one foggy week on the Maine coast. Cut for vertical first, then widened for broadcast.",
        video: "/media/work/harbor-coffee.mp4",
        poster: "/media/work/harbor-coffee.jpg",
        tags: &["Campaign", "Vertical", "Broadcast"],
    },
    WorkSample {
        slug: "field-notes-app",
        title: "Field Notes Launch",
        client: "Field Notes Inc.",
        summary: "Product launch film plus forty cut-downs for paid social. The hero cut doubled trial signups in week one.",
        video: "/media/work/field-notes.mp4",
        poster: "/media/work/field-notes.jpg",
        tags: &["Launch", "Paid social"],
    },
    WorkSample {
        slug: "ridgeline-outdoors",
        title: "Ridgeline: Above Treeline",
        client: "Ridgeline Outdoors",
        summary: "Documentary short following two guides across the Presidential Traverse in winter.",
        video: "/media/work/ridgeline.mp4",
        poster: "/media/work/ridgeline.jpg",
        tags: &["Documentary", "Outdoor"],
    },
    WorkSample {
        slug: "ledger-bank",
        title: "Money, Explained Slowly",
        client: "Ledger Community Bank",
        summary: "An animated explainer series that replaced the bank's FAQ page and cut support calls by a third.",
        video: "/media/work/ledger.mp4",
        poster: "/media/work/ledger.jpg",
        tags: &["Animation", "Series"],
    },
];

/// Work sample with `slug`, if there is one
pub fn find_work(slug: &str) -> Option<&'static WorkSample> {
    WORK.iter().find(|w| w.slug == slug)
}

pub const AGENCY_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They turned a vague brief into the best-performing ad we have ever run.",
        author: "Dana Whitfield",
        role: "CMO, Harbor Coffee Roasters",
    },
    Testimonial {
        quote: "Fast, calm and allergic to stock footage. Exactly what we needed.",
        author: "Marcus Lee",
        role: "Founder, Field Notes",
    },
    Testimonial {
        quote: "Our customers actually watch these videos to the end. That never happens.",
        author: "Priya Raman",
        role: "Head of Digital, Ledger Community Bank",
    },
];

pub const AGENCY_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Most campaigns run six to ten weeks from kickoff call to final delivery. Cut-downs for social usually land a week after the hero cut.",
    },
    FaqEntry {
        question: "Do you work with in-house teams?",
        answer: "All the time. We can own the whole thing or slot in for a single phase like scripting, shooting or the edit.",
    },
    FaqEntry {
        question: "What does a project cost?",
        answer: "Campaigns start around $25k. Book an intro call and we will give you a real number within two days.",
    },
];

pub const CLONE_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How does Echo learn my voice?",
        answer: "You connect your newsletter, podcast transcripts and past replies. Echo builds a style profile from them and never trains shared models on your data.",
    },
    FaqEntry {
        question: "Can I review replies before they go out?",
        answer: "Yes. Start in review mode where every reply waits for approval, then switch categories to autopilot once you trust them.",
    },
    FaqEntry {
        question: "Which platforms are supported?",
        answer: "Instagram DMs, email and website chat today. TikTok comments are in beta.",
    },
    FaqEntry {
        question: "Can I cancel any time?",
        answer: "Plans are month to month. Cancel from the dashboard and your data is deleted after thirty days.",
    },
];

pub const CLONE_PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$29",
        period: "/month",
        description: "For creators testing the waters",
        features: &[
            ("500 replies per month", true),
            ("Review mode", true),
            ("Email channel", true),
            ("Instagram DMs", false),
            ("Custom voice tuning", false),
        ],
        cta: "Start free trial",
        highlighted: false,
    },
    PricingTier {
        name: "Creator",
        price: "$79",
        period: "/month",
        description: "For full-time creators with a busy inbox",
        features: &[
            ("5,000 replies per month", true),
            ("Review mode and autopilot", true),
            ("Email channel", true),
            ("Instagram DMs", true),
            ("Custom voice tuning", false),
        ],
        cta: "Start free trial",
        highlighted: true,
    },
    PricingTier {
        name: "Studio",
        price: "$249",
        period: "/month",
        description: "For teams managing several personalities",
        features: &[
            ("Unlimited replies", true),
            ("Review mode and autopilot", true),
            ("All channels", true),
            ("Instagram DMs", true),
            ("Custom voice tuning", true),
        ],
        cta: "Book a demo",
        highlighted: false,
    },
];

pub const COACHING_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I took my first two-week vacation in six years and revenue went up.",
        author: "Lena Ortiz",
        role: "Owner, Ortiz Landscape Design",
    },
    Testimonial {
        quote: "The weekly calls were the only meeting I never wanted to skip.",
        author: "Tom Becker",
        role: "Founder, Becker Bikes",
    },
    Testimonial {
        quote: "Clear, practical and kind. My team noticed the difference before I did.",
        author: "Aisha Bello",
        role: "Director, Bello Physio",
    },
    Testimonial {
        quote: "We finally have a hiring process that does not depend on my mood.",
        author: "Sam Nguyen",
        role: "CEO, Nguyen & Daughters",
    },
];

pub const COACHING_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Who is the program for?",
        answer: "Owners of service businesses with two to thirty employees who still approve every decision themselves.",
    },
    FaqEntry {
        question: "What happens on the discovery call?",
        answer: "Thirty minutes on where the business is stuck. If the program is not a fit you still leave with a written next step.",
    },
    FaqEntry {
        question: "How much time does it take each week?",
        answer: "One ninety-minute call plus about two hours of implementation work.",
    },
];

pub const COACHING_PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Group",
        price: "$1,800",
        period: "12 weeks",
        description: "Cohort of eight owners, weekly group calls",
        features: &[
            ("Weekly group call", true),
            ("Playbook library", true),
            ("Private Slack", true),
            ("1:1 sessions", false),
        ],
        cta: "Apply now",
        highlighted: false,
    },
    PricingTier {
        name: "Private",
        price: "$6,500",
        period: "12 weeks",
        description: "One-on-one coaching with direct access",
        features: &[
            ("Weekly 1:1 call", true),
            ("Playbook library", true),
            ("Private Slack", true),
            ("Team workshop", true),
        ],
        cta: "Book a call",
        highlighted: true,
    },
];

/// Short-form video and photo posts shown on the musician site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPost {
    TikTok { user: &'static str, video_id: &'static str },
    Instagram { permalink: &'static str },
}

pub const MUSIC_POSTS: &[SocialPost] = &[
    SocialPost::TikTok {
        user: "junipervale",
        video_id: "7301234567890123456",
    },
    SocialPost::TikTok {
        user: "junipervale",
        video_id: "7309876543210987654",
    },
    SocialPost::Instagram {
        permalink: "https://www.instagram.com/p/C1aBcDeFgHi/",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub title: &'static str,
    pub year: u16,
    pub cover: &'static str,
    pub preview: &'static str,
}

pub const RELEASES: &[Release] = &[
    Release {
        title: "Hayloft Static",
        year: 2024,
        cover: "/media/music/hayloft.jpg",
        preview: "/media/music/hayloft-loop.mp4",
    },
    Release {
        title: "Low Sun, Long Drive",
        year: 2022,
        cover: "/media/music/low-sun.jpg",
        preview: "/media/music/low-sun-loop.mp4",
    },
    Release {
        title: "Porchlight EP",
        year: 2020,
        cover: "/media/music/porchlight.jpg",
        preview: "/media/music/porchlight-loop.mp4",
    },
];

pub const BRAND_TOPICS: &[(&str, &str)] = &[
    (
        "Operating",
        "How small teams plan, hire and say no without a layer of managers.",
    ),
    (
        "Writing",
        "Drafting in public, editing in private and shipping every Thursday.",
    ),
    (
        "Speaking",
        "Keynotes and workshops on calm growth for founder-led companies.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_work() {
        let work = find_work("ledger-bank").expect("ledger-bank is listed");
        assert_eq!(work.client, "Ledger Community Bank");
        assert!(find_work("does-not-exist").is_none());
        assert!(find_work("").is_none());
    }

    #[test]
    fn test_work_slugs_unique() {
        let mut slugs: Vec<_> = WORK.iter().map(|w| w.slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), WORK.len());
    }

    #[test]
    fn test_site_paths_unique() {
        let mut paths: Vec<_> = Site::ALL.iter().map(|s| s.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Site::ALL.len());
    }

    #[test]
    fn test_one_highlighted_plan_per_table() {
        for table in [CLONE_PRICING, COACHING_PRICING] {
            assert_eq!(table.iter().filter(|t| t.highlighted).count(), 1);
        }
    }
}
