//! Static site copy: biography, skills, and career timeline. Rendered
//! directly by the home page; unlike the project data this never comes from
//! the API.

pub const NAME: &str = "Alex Carter";
pub const TAGLINE: &str = "Systems-minded full-stack developer";

pub const BIO: &str = "I build backend services and the frontends that sit \
    on top of them, with a soft spot for making things keep working when \
    the network does not. Previously infrastructure at a logistics startup; \
    currently taking on contract work.";

pub struct Skill {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Languages",
        items: &["Rust", "TypeScript", "Go", "Python"],
    },
    Skill {
        name: "Backend",
        items: &["Tokio", "PostgreSQL", "Redis", "gRPC"],
    },
    Skill {
        name: "Frontend",
        items: &["Yew", "React", "Tailwind CSS"],
    },
    Skill {
        name: "Operations",
        items: &["Kubernetes", "Terraform", "GitHub Actions"],
    },
];

pub struct TimelineEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2024 — present",
        role: "Independent contractor",
        organization: "Self-employed",
        summary: "Backend and tooling work for small teams, mostly Rust \
                  services and the dashboards around them.",
    },
    TimelineEntry {
        period: "2021 — 2024",
        role: "Senior infrastructure engineer",
        organization: "Freightline",
        summary: "Owned the routing service and its migration from a \
                  monolith; on-call lead for the ingestion pipeline.",
    },
    TimelineEntry {
        period: "2018 — 2021",
        role: "Software engineer",
        organization: "Brightpath Analytics",
        summary: "Full-stack product work on a reporting platform; shipped \
                  the embedded dashboard SDK.",
    },
];
