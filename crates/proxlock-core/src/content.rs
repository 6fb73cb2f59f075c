//! Static marketing copy and link targets for the landing page.

use chrono::Datelike;

pub mod urls {
    pub const APP: &str = "https://app.proxlock.dev";
    pub const DOCS: &str = "https://docs.proxlock.dev";
    pub const DISCORD: &str = "https://discord.gg/BZ4Uax5nnU";
    pub const GITHUB: &str = "https://github.com/proxlock";
    pub const GITHUB_BACKEND: &str = "https://github.com/ProxLock/Backend";
    pub const GITHUB_FRONTEND: &str = "https://github.com/ProxLock/Frontend";
    pub const GITHUB_LANDING: &str = "https://github.com/ProxLock/Landing";
    pub const EMAIL_CONTACT: &str = "morris@proxlock.dev";
}

pub const HERO_TITLE: &str = "ProxLock";
pub const HERO_SUBTITLE: &str = "Secure API Proxy Management";
pub const HERO_DESCRIPTION: &str = "Protect and manage your API keys with ease. ProxLock provides \
    a secure gateway for your applications¹, ensuring your sensitive credentials stay safe.";
pub const HERO_ACTION: &str = "Get Started";

pub struct Subsection {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HOW_IT_WORKS_TITLE: &str = "How It Works";
pub const HOW_IT_WORKS: [Subsection; 2] = [
    Subsection {
        title: "Key Storage & Splitting",
        body: "ProxLock uses an XORed partial key system to ensure your complete API key is \
            never stored in one place. When you upload your API key to ProxLock, we split it \
            into two partial keys, so we don't know your complete key either.",
    },
    Subsection {
        title: "Dynamic Proxying",
        body: "When your app makes an API request, ProxLock routes it through our secure proxy \
            infrastructure. We validate the app instance using Apple's Device Check to ensure \
            authenticity and prevent unauthorized access. The bearer token is then dynamically \
            constructed by combining the partial keys, and the request is forwarded to the \
            target service with proper authentication, which is then relayed back to your app. \
            This process ensures your credentials remain secure while maintaining minimal \
            latency and maximum reliability.",
    },
];

pub struct RepoCard {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const OPEN_SOURCE_TITLE: &str = "Open Source";
pub const OPEN_SOURCE_DESCRIPTION: &str = "ProxLock is built with transparency in mind. Our \
    entire codebase is open source and available on GitHub. We believe in security through \
    openness, not obscurity.";
pub const OPEN_SOURCE_REPOS: [RepoCard; 3] = [
    RepoCard {
        title: "Backend",
        description: "The core API proxy and key management infrastructure.",
        url: urls::GITHUB_BACKEND,
    },
    RepoCard {
        title: "Frontend",
        description: "The dashboard for managing your API keys and projects.",
        url: urls::GITHUB_FRONTEND,
    },
    RepoCard {
        title: "Landing Page",
        description: "This website! See how we present ProxLock to the world.",
        url: urls::GITHUB_LANDING,
    },
];

pub const CTA_TITLE: &str = "Ready to Get Started?";
pub const CTA_DESCRIPTION: &str = "Join our limited Apple platform beta. Don't worry, we plan \
    to support other platforms soon.";

pub const FOOTNOTE: &str = "¹ ProxLock is currently in a limited beta for Apple platforms only.";

pub const PRICING_TITLE: &str = "Simple Pricing";
pub const PRICING_SUBTITLE: &str = "Choose the plan that fits your needs.";
pub const BETA_BADGE: &str = "Beta Pricing";
pub const BETA_NOTICE: &str =
    "Subscribe now to lock in these rates forever. Prices may increase after beta.";

pub const ENTERPRISE_NAME: &str = "Enterprise";
pub const ENTERPRISE_PRICE: &str = "Custom";
pub const ENTERPRISE_BILLING: &str = "Contact us for details";
pub const ENTERPRISE_DESCRIPTION: &str =
    "Need higher limits? Get in touch for a custom plan.";

/// Footer copyright line with the current year.
pub fn copyright_line() -> String {
    format!(
        "© {} ProxLock. All rights reserved.",
        chrono::Utc::now().year()
    )
}
