//! Biography, lab, funding, donations, experience and contact links

use folio_core::{ContentBlock, ExperienceEntry, IconKind, Link};

pub const OWNER_NAME: &str = "Anastasios Papadam";
pub const OWNER_TAGLINE: &str = "PhD Candidate | Genetic Epidemiology";

pub const CONTACT_LINKS: &[Link] = &[
    Link::with_icon(
        "Personal Email",
        "mailto:a.papadam@hotmail.com",
        IconKind::Mail,
    ),
    Link::with_icon(
        "Work Email",
        "mailto:a.papadam.21@abdn.ac.uk",
        IconKind::Mail,
    ),
    Link::with_icon(
        "LinkedIn",
        "https://www.linkedin.com/in/anastasios-papadam-11b432146",
        IconKind::LinkedIn,
    ),
    Link::with_icon(
        "ResearchGate",
        "https://www.researchgate.net/profile/Anastasios-Papadam-2",
        IconKind::ResearchGate,
    ),
    Link::with_icon(
        "ORCID",
        "https://orcid.org/0000-0002-6780-6311",
        IconKind::Orcid,
    ),
];

pub(super) const ABOUT: &[ContentBlock] = &[
    ContentBlock::Paragraph(
        "I am Anastasios Papadam, an early-career researcher from Athens, Greece, specializing in the genetics of age-related disease.",
    ),
    ContentBlock::Paragraph(
        "I completed a five-year integrated Master's (M.Sci.) in Genetics, specializing in Immunology and Biobusiness, at the University of Aberdeen, Scotland, which included a key industrial placement. I then pursued my PhD, where my research focused on the role of chromosomal abundance in the risk and prognosis of age-related macular degeneration (AMD).",
    ),
    ContentBlock::Paragraph(
        "During my doctoral studies, my interests expanded to include the interconnected fields of biological ageing and how patients with AMD may exhibit differential organ ageing. I am now actively seeking a postdoctoral position where I can apply my skills, deepen my research, and contribute to new discoveries in the field.",
    ),
    ContentBlock::Links(CONTACT_LINKS),
];

pub(super) const FUNDER: &[ContentBlock] = &[
    ContentBlock::Paragraph(
        "My PhD research is proudly funded by Fight for Sight, the UK's leading eye research charity.",
    ),
    ContentBlock::Links(&[Link::new(
        "Learn More About Fight for Sight",
        "https://www.fightforsight.org.uk/",
    )]),
];

pub(super) const DONATE: &[ContentBlock] = &[
    ContentBlock::Paragraph(
        "Your support can accelerate the discovery of new treatments and cures for sight loss. Consider donating to these leading organizations:",
    ),
    ContentBlock::Links(&[
        Link::new("Fight for Sight", "https://www.fightforsight.org.uk/donate/"),
        Link::new("Macular Society", "https://www.macularsociety.org/donate/"),
        Link::new(
            "Royal National Institute of Blind People (RNIB)",
            "https://www.rnib.org.uk/donations-and-fundraising",
        ),
    ]),
];

pub(super) const LAB: &[ContentBlock] = &[
    ContentBlock::Paragraph(
        "As a member of The Grassmann Lab, my research contributes to our group's primary mission: to unravel the complex genetic architecture of inherited diseases and understand how genetic factors influence their severity and progression. Our work aims to move beyond simple risk identification to pinpoint novel therapeutic targets, especially for conditions with limited treatment options.",
    ),
    ContentBlock::Paragraph(
        "We investigate the genetic connections between different diseases, searching for shared pathways that might reveal new treatment opportunities. A key focus is on less-explored genetic markers, such as somatic mosaicism of sex chromosomes, which are emerging as crucial indicators for both disease risk and severity. By integrating these approaches, we hope to improve risk prediction, disease management, and ultimately, patient outcomes.",
    ),
    ContentBlock::Heading("Official Profiles:"),
    ContentBlock::Links(&[
        Link::new(
            "Karolinska Institutet Profile",
            "https://ki.se/en/people/felix-grassmann",
        ),
        Link::new(
            "Health and Medical University Potsdam",
            "https://www.health-and-medical-university.de/ueber-uns-2/team/team-fakultaet-medizin/prof-dr-felix-grassmann/",
        ),
    ]),
];

pub(super) const EXPERIENCE: &[ContentBlock] = &[ContentBlock::Experience(&[
    ExperienceEntry {
        role: "Demonstrator (UG & PG), University of Aberdeen, UK",
        period: "2022–Present",
        project: None,
        highlights: &[
            "Mentored students in epidemiology; delivered lectures/workshops on quantitative methods and analytical tools.",
            "Developed educational materials in genetic epidemiology; supported hands‑on tutorials and practicals.",
            "Provided guidance during tutorials and practicals in UG and PG courses in various fields, such as computational and molecular biology among others.",
        ],
    },
    ExperienceEntry {
        role: "Intern — Genentech, California, US",
        period: "Jun 2024–Sep 2024",
        project: None,
        highlights: &[
            "Performed genome‑wide association studies linking image-derived phenotypes to genetic variants.",
            "Integrated association results with functional annotation resources to nominate high‑confidence variants/targets.",
            "Enforced stringent QC and version control; communicated results through technical reports and visual summaries.",
        ],
    },
    ExperienceEntry {
        role: "NHS Certified COVID‑19 Tester, University of Aberdeen, UK",
        period: "Dec 2020–May 2021",
        project: None,
        highlights: &["Guided participants through rapid testing workflows and proper reagent handling."],
    },
    ExperienceEntry {
        role: "Placement Student, BSRC “Alexander Fleming”, Vari, Attica, Greece",
        period: "Sep 2019–Aug 2020",
        project: Some(
            "Establishment of a novel PBL‑NSG model to induce primary/secondary T‑cell responses against lung cancer patient‑derived grafts",
        ),
        highlights: &[
            "Cell culture (A549), staining and FACS; work with human lung tissues and experimental animals; quantitative image analysis (ImageJ).",
        ],
    },
])];
