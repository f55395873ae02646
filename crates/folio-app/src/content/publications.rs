//! Peer-reviewed publications and conference presentations

use folio_core::{Conference, ContentBlock, Publication};

pub(super) const PUBLICATIONS_SECTION: &[ContentBlock] = &[
    ContentBlock::Heading("Peer-Reviewed Publications"),
    ContentBlock::Publications(PUBLICATIONS),
    ContentBlock::Rule,
    ContentBlock::Heading("Conference Presentations"),
    ContentBlock::Conferences(CONFERENCES),
];

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "Differential Organ Ageing Is Associated With Age‐Related Macular Degeneration",
        authors: "Papadam A, Lionikas A, Grassmann F.",
        journal: "Aging Cell",
        year: 2025,
        doi: Some("10.1111/acel.14473"),
    },
    Publication {
        title: "Tapping natures rhythm: the role of season in mitochondrial function and genetics in the UK biobank",
        authors: "Papadam A, Mihov M, Koller A, Weissensteiner H, Stark K, Grassmann F.",
        journal: "Hum Genomics",
        year: 2025,
        doi: Some("10.1186/s40246-025-00743-8"),
    },
    Publication {
        title: "Retinal polyunsaturated fatty acid supplementation reverses aging-related vision decline in mice",
        authors: "Gao F, Tom E, Rydz C, Cho W, Kolesnikov A V., Sha Y, Papadam A, et al.",
        journal: "Sci Transl Med",
        year: 2025,
        doi: Some("10.1126/scitranslmed.ads5769"),
    },
];

pub const CONFERENCES: &[Conference] = &[
    Conference {
        title: "The role of somatic chromosomal abundance in risk and prognosis of age-related macular degeneration",
        authors: "Anastasios Papadam; Bernhard Hf Weber; Emily Y Chew; Claudia Strachwitz; Felix Grassmann",
        event: "ARVO",
        location: "US",
        year: 2024,
    },
    Conference {
        title: "Exploring the Genetic Landscape of Geographic Atrophy Progression: A GWAS in 2,472 Individuals with AMD",
        authors: "Amy Stockwell; Anastasios Papadam; Tiarnan D L Keenan; Catherine Cukras; Elvira Agron; Emily Y Chew; Bernhard Hf Weber; Brian Yaspan; Felix Grassmann",
        event: "ARVO",
        location: "US",
        year: 2024,
    },
    Conference {
        title: "The role of somatic chromosomal abundance in risk and prognosis of age-related macular degeneration",
        authors: "Anastasios Papadam; Bernhard Hf Weber; Emily Y Chew; Claudia Strachwitz; Felix Grassmann",
        event: "ProRetina",
        location: "Germany",
        year: 2023,
    },
];
