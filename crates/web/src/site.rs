//! Compiled-in site copy: profile, experience entries, and tech stack
//! badges. Curated by hand, consumed by the templates.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub whatsapp_link: &'static str,
    pub cv_link: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Girindra Sulistiyo Wardoyo",
    subtitle: "Mobile Developer (Flutter) & Web Developer (JavaScript)",
    description: "Informatics graduate from Universitas Ahmad Dahlan (GPA 3.54) with hands-on \
                  experience building mobile apps. Focused on Flutter and Firebase, with strong \
                  communication, critical thinking, and teamwork skills.",
    location: "Cilacap, Central Java, Indonesia",
    whatsapp_link: "https://wa.me/6285156796968",
    cv_link: "/cv/cv_girindra.pdf",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    /// Short monogram shown next to the entry.
    pub mark: &'static str,
    pub responsibilities: &'static [&'static str],
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Universitas Ahmad Dahlan",
        role: "Informatics Laboratory Assistant",
        duration: "Jan 2020 - Feb 2022",
        mark: "UAD",
        responsibilities: &[
            "Trained 50+ students in statistics laboratory sessions.",
            "Guided students to solve technical and analytical problems.",
            "Reported semester learning outcomes to lecturers.",
        ],
        skills: &["Communication", "Teaching", "Problem Solving"],
    },
    Experience {
        company: "Bidang Publikasi Ilmiah UAD",
        role: "Web Support, Graphic Design, and Front Desk",
        duration: "Sep 2020 - Mar 2021",
        mark: "BPI",
        responsibilities: &[
            "Updated web content based on stakeholder requests.",
            "Created design assets, pamphlets, and edited videos.",
            "Handled front desk and publication support tasks.",
        ],
        skills: &["Web Support", "CorelDraw", "Teamwork"],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechBadge {
    pub label: &'static str,
    /// Devicon class name rendered as `<i class="...">`.
    pub icon: &'static str,
}

pub const TECH_STACK: &[TechBadge] = &[
    TechBadge { label: "Dart", icon: "devicon-dart-plain colored" },
    TechBadge { label: "Flutter", icon: "devicon-flutter-plain colored" },
    TechBadge { label: "Firebase", icon: "devicon-firebase-plain colored" },
    TechBadge { label: "MySQL", icon: "devicon-mysql-original colored" },
    TechBadge { label: "C++", icon: "devicon-cplusplus-plain colored" },
    TechBadge { label: "PHP", icon: "devicon-php-plain colored" },
    TechBadge { label: "Bootstrap", icon: "devicon-bootstrap-plain colored" },
];
