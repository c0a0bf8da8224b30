//! Static marketing copy.
//!
//! Everything the pages say lives here so the components stay purely
//! presentational.

/// Icon shown next to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Lightbulb,
    Dollar,
    People,
    Calendar,
}

/// A product capability.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A couple's review.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    /// Longer story shown on the testimonials page.
    pub details: &'static str,
}

/// Features shown in the landing page tab switcher.
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Lightbulb,
        title: "AI-Powered Planning",
        description: "Get personalized recommendations and smart suggestions tailored to your style and budget",
    },
    Feature {
        icon: FeatureIcon::Dollar,
        title: "Budget Tracking",
        description: "Stay on top of expenses with real-time budget tracking and cost breakdowns",
    },
    Feature {
        icon: FeatureIcon::People,
        title: "Vendor Network",
        description: "Access our curated network of trusted vendors and read verified reviews",
    },
    Feature {
        icon: FeatureIcon::Calendar,
        title: "Timeline Management",
        description: "Never miss a deadline with automated reminders and milestone tracking",
    },
];

/// Capability tiles on the about page.
pub const CAPABILITIES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Lightbulb,
        title: "Smart Recommendations",
        description: "Personalised suggestions based on your style and budget",
    },
    Feature {
        icon: FeatureIcon::Dollar,
        title: "Budget Tracking",
        description: "Real-time expense management and cost breakdowns",
    },
    Feature {
        icon: FeatureIcon::People,
        title: "Vendor Network",
        description: "Curated connections with trusted professionals",
    },
    Feature {
        icon: FeatureIcon::Calendar,
        title: "Timeline Management",
        description: "Automated reminders and milestone tracking",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "This app made planning our wedding so much easier! The AI suggestions were spot-on and saved us countless hours of research.",
        author: "Sarah & Michael",
        location: "San Francisco, CA",
        details: "We were overwhelmed with all the decisions we had to make, but the AI planner helped us narrow down our options based on our style and budget. The timeline feature kept us on track throughout the entire process.",
    },
    Testimonial {
        quote: "We stayed under budget thanks to the expense tracking feature. Highly recommend to any couple planning their big day!",
        author: "Jessica & David",
        location: "Austin, TX",
        details: "The budget tracker was a game-changer. We could see exactly where our money was going and got alerts when we were approaching our limits. It took so much stress out of the planning process.",
    },
    Testimonial {
        quote: "The vendor recommendations were incredible. We found our dream photographer and venue through this platform.",
        author: "Emily & James",
        location: "New York, NY",
        details: "We were struggling to find vendors that matched our vision and budget. The curated vendor network connected us with amazing professionals who understood exactly what we wanted.",
    },
];

/// A step in the "How it works" section.
#[derive(Debug, Clone, Copy)]
pub struct HowItWorksStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOW_IT_WORKS: &[HowItWorksStep] = &[
    HowItWorksStep {
        title: "Tell us your vision",
        description: "Share your date, guest count, budget and the style you dream of.",
    },
    HowItWorksStep {
        title: "Get a tailored plan",
        description: "Amore drafts venues, vendors and a budget breakdown in minutes.",
    },
    HowItWorksStep {
        title: "Plan and book",
        description: "Refine the plan in chat and book the vendors you love.",
    },
];

pub const MISSION: &str = "We believe every couple deserves a stress-free wedding planning experience. Our AI-powered platform combines cutting-edge technology with personalised service to help you create the wedding of your dreams without the overwhelm. We're here to transform wedding planning from overwhelming to extraordinary.";

pub const WHAT_WE_DO: &str = "Our intelligent wedding planner acts as your personal assistant, available 24/7 to help with every aspect of your wedding planning journey:";

pub const WHY_CHOOSE_US: &[&str] = &[
    "Planning a wedding shouldn't feel like a full-time job. We've helped thousands of couples turn their vision into reality while staying organised, on budget, and stress-free.",
    "Our AI learns your preferences and adapts to your needs, making the entire process feel natural and enjoyable. Whether you're just starting to plan or need help with the final details, we're here to support you every step of the way.",
];
