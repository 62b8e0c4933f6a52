//! Static site copy: everything the sections render is declared here as
//! plain const data.

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Work", href: "#work" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const BRAND: &str = "VEGA";
pub const BRAND_SUFFIX: &str = ".DEV";

pub const HERO_KICKER: &str = "Freelance Software Engineer";
pub const HERO_TITLE: &str = "Adrian Vega";
pub const HERO_TAGLINE: &str =
    "I design and ship fast, resilient web products — from first sketch to production.";
pub const HERO_CTA_PRIMARY: (&str, &str) = ("See my work", "#projects");
pub const HERO_CTA_SECONDARY: (&str, &str) = ("Get in touch", "#contact");

pub const MARQUEE: [&str; 10] = [
    "Rust",
    "WebAssembly",
    "TypeScript",
    "React",
    "Node.js",
    "PostgreSQL",
    "GraphQL",
    "Docker",
    "Tailwind CSS",
    "Next.js",
];

pub struct Skill {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Frontend",
        skills: &[
            Skill {
                name: "React & Next.js",
                blurb: "Component-driven UIs, server rendering, and app-router architectures.",
            },
            Skill {
                name: "TypeScript",
                blurb: "Strictly-typed application code and shared API contracts.",
            },
            Skill {
                name: "WebAssembly",
                blurb: "Rust-compiled modules for animation and compute-heavy browser work.",
            },
            Skill {
                name: "CSS & Motion",
                blurb: "Responsive layout, design systems, and animation that stays out of the way.",
            },
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            Skill {
                name: "Rust services",
                blurb: "Small, predictable HTTP services with strong typing end to end.",
            },
            Skill {
                name: "Node.js & Express",
                blurb: "REST APIs, middleware pipelines, and real-time channels.",
            },
            Skill {
                name: "GraphQL",
                blurb: "Schema design and resolvers that match how clients actually query.",
            },
        ],
    },
    SkillGroup {
        title: "Data",
        skills: &[
            Skill {
                name: "PostgreSQL",
                blurb: "Schema design, query tuning, and migrations that don't bite back.",
            },
            Skill {
                name: "Redis",
                blurb: "Caching, queues, and ephemeral state where it belongs.",
            },
            Skill {
                name: "Object storage",
                blurb: "Asset pipelines and signed-delivery setups on S3-compatible stores.",
            },
        ],
    },
    SkillGroup {
        title: "Practices",
        skills: &[
            Skill {
                name: "CI & shipping",
                blurb: "Boring deploys: containers, pipelines, preview environments.",
            },
            Skill {
                name: "Performance",
                blurb: "Budgets, profiling, and the discipline to delete code.",
            },
            Skill {
                name: "Collaboration",
                blurb: "Readable PRs, honest estimates, async-friendly communication.",
            },
        ],
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: [Experience; 5] = [
    Experience {
        role: "Lead Frontend Engineer",
        company: "Northlight Studio",
        period: "Jan 2023 – Present",
        summary: "Own the web platform for a product studio: design system, build \
                  tooling, and the performance budget for every client launch.",
    },
    Experience {
        role: "Full-stack Engineer",
        company: "Ledgerline",
        period: "Jul 2020 – Dec 2022",
        summary: "Built reconciliation dashboards and the public API for a fintech \
                  reporting tool; cut p95 page load from 4s to under a second.",
    },
    Experience {
        role: "Contract Engineer",
        company: "Brightfield Health",
        period: "Dec 2021 – Feb 2022",
        summary: "Shipped a patient-intake flow with offline support for clinics \
                  with unreliable connectivity.",
    },
    Experience {
        role: "Frontend Developer",
        company: "Atlas Craft Market",
        period: "Aug 2021 – Oct 2021",
        summary: "Storefront revamp for an artisan marketplace; doubled mobile \
                  conversion on the product pages.",
    },
    Experience {
        role: "Junior Developer",
        company: "Harborview Agency",
        period: "Jul 2020 – Nov 2020",
        summary: "First production work: campaign sites, CMS integrations, and an \
                  enduring respect for browser caching.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub stack: &'static [&'static str],
    pub url: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Tidewatch",
        blurb: "Marine-weather dashboard with offline chart tiles and a budget of \
                100KB of JavaScript.",
        stack: &["Rust", "WebAssembly", "SvelteKit"],
        url: "https://tidewatch.example.dev/",
    },
    Project {
        title: "Ledgerline Reports",
        blurb: "Self-serve financial reporting with streamed exports and an \
                audit-friendly permissions model.",
        stack: &["TypeScript", "Node.js", "PostgreSQL"],
        url: "https://reports.ledgerline.example.com/",
    },
    Project {
        title: "Mark8 Agency Site",
        blurb: "Marketing site with editorial CMS and heavy-but-cheap scroll \
                animation work.",
        stack: &["Next.js", "Tailwind CSS"],
        url: "https://mark8.example.io/",
    },
    Project {
        title: "Queue Fair",
        blurb: "Virtual waiting room for ticket drops; absorbed a 40k-user spike \
                on launch night without a wobble.",
        stack: &["Rust", "Redis", "Fly.io"],
        url: "https://queuefair.example.app/",
    },
    Project {
        title: "Atlas Storefront",
        blurb: "Artisan marketplace storefront with image-heavy pages that still \
                score green on Core Web Vitals.",
        stack: &["React", "GraphQL", "Cloudflare"],
        url: "https://atlas.example.shop/",
    },
    Project {
        title: "Intake Kit",
        blurb: "Embeddable patient-intake forms with end-to-end encryption and \
                an offline-first sync layer.",
        stack: &["TypeScript", "IndexedDB", "Web Crypto"],
        url: "https://intakekit.example.health/",
    },
];

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        value: "adrian@vega.dev",
        href: "mailto:adrian@vega.dev",
    },
    ContactChannel {
        label: "GitHub",
        value: "github.com/adrianvega",
        href: "https://github.com/adrianvega",
    },
    ContactChannel {
        label: "Telegram",
        value: "@adrianvega",
        href: "https://t.me/adrianvega",
    },
];

pub const CONTACT_HEADING: &str = "Let's build something";
pub const CONTACT_BLURB: &str =
    "Currently taking on select freelance projects. The fastest way to reach \
     me is Telegram; email works too.";

pub const CHAT_HREF: &str = "https://t.me/adrianvega";
pub const FOOTER_NOTE: &str = "© 2026 Adrian Vega. Built in Rust, rendered by your browser.";
