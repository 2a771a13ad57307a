//! Static page content: profile, skill categories and featured projects.

pub const NAME: &str = "Alex Carver";
pub const TAGLINE: &str = "Full-Stack Developer";
pub const EMAIL: &str = "hello@alexcarver.dev";
pub const LOCATION: &str = "Portland, OR";
pub const GITHUB_URL: &str = "https://github.com/acarver";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/alex-carver-dev";
pub const CV_PATH: &str = "/AlexCarver_CV.pdf";
pub const CV_FILENAME: &str = "AlexCarver_CV.pdf";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: "7+",
        label: "Years Experience",
    },
    Stat {
        value: "20+",
        label: "Projects Shipped",
    },
    Stat {
        value: "99%",
        label: "Client Satisfaction",
    },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    /// Tailwind gradient stops used for the category accent.
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "Frontend",
        icon: "devicon-react-original",
        accent: "from-blue-500 to-cyan-500",
        skills: &["React", "TypeScript", "Leptos", "Tailwind CSS", "Vite"],
    },
    SkillCategory {
        title: "Backend",
        icon: "devicon-rust-original",
        accent: "from-green-500 to-emerald-500",
        skills: &["Rust", "Axum", "Node.js", "PostgreSQL", "Redis"],
    },
    SkillCategory {
        title: "DevOps",
        icon: "devicon-docker-plain",
        accent: "from-purple-500 to-pink-500",
        skills: &["Docker", "Kubernetes", "GitHub Actions", "Terraform", "Linux"],
    },
    SkillCategory {
        title: "Embedded",
        icon: "devicon-embeddedc-plain",
        accent: "from-orange-500 to-red-500",
        skills: &["ESP32", "embedded-hal", "C/C++", "MQTT", "FreeRTOS"],
    },
    SkillCategory {
        title: "Data & ML",
        icon: "devicon-python-plain",
        accent: "from-indigo-500 to-purple-500",
        skills: &["Python", "Polars", "ONNX", "Computer Vision"],
    },
    SkillCategory {
        title: "Mobile",
        icon: "devicon-flutter-plain",
        accent: "from-pink-500 to-rose-500",
        skills: &["PWA", "React Native", "Responsive Design"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub highlights: &'static [&'static str],
    /// Tailwind gradient stops for the card's header bar and hover wash.
    pub gradient: &'static str,
    pub repo_url: &'static str,
    pub demo_url: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Freightline",
        category: "Logistics SaaS",
        description: "Dispatch and fleet-tracking platform with a live map, \
                      offline-tolerant mobile client and a Rust ingestion \
                      pipeline that keeps position updates under 200ms \
                      end-to-end.",
        tech: &["Rust", "Axum", "PostgreSQL", "React", "Kubernetes"],
        highlights: &["10k+ vehicles", "99.9% uptime", "Live dashboard"],
        gradient: "from-blue-600 via-purple-600 to-pink-600",
        repo_url: "https://github.com/acarver/freightline",
        demo_url: "https://freightline.demo.alexcarver.dev",
    },
    Project {
        title: "Kilnwatch",
        category: "Industrial IoT",
        description: "Telemetry collector and digital twin for ceramic kilns: \
                      ESP32 sensor firmware, MQTT fan-in and anomaly alerts \
                      long before a firing is ruined.",
        tech: &["Rust", "ESP32", "MQTT", "InfluxDB", "Grafana"],
        highlights: &["Real-time telemetry", "Digital twin", "OTA updates"],
        gradient: "from-green-600 via-teal-600 to-blue-600",
        repo_url: "https://github.com/acarver/kilnwatch",
        demo_url: "https://kilnwatch.demo.alexcarver.dev",
    },
    Project {
        title: "Corridor",
        category: "Smart City",
        description: "Signal-timing optimizer for arterial corridors. Fuses \
                      loop-detector and camera counts, then searches timing \
                      plans that cut average wait at the worst intersections.",
        tech: &["Python", "ONNX", "SUMO", "Docker", "Computer Vision"],
        highlights: &["20% less waiting", "35% fewer conflicts", "94% model accuracy"],
        gradient: "from-purple-600 via-pink-600 to-red-600",
        repo_url: "https://github.com/acarver/corridor",
        demo_url: "https://corridor.demo.alexcarver.dev",
    },
    Project {
        title: "Relaygrid",
        category: "Developer Tooling",
        description: "Self-hosted webhook relay with replay, fan-out and \
                      per-endpoint backpressure. Single static binary, \
                      boring to operate on purpose.",
        tech: &["Rust", "Tokio", "SQLite", "Tailwind"],
        highlights: &["Single binary", "At-least-once delivery", "Replay UI"],
        gradient: "from-orange-600 via-red-600 to-pink-600",
        repo_url: "https://github.com/acarver/relaygrid",
        demo_url: "https://relaygrid.demo.alexcarver.dev",
    },
];
