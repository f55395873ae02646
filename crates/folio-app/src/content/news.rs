//! Scientific news digest

use folio_core::{ContentBlock, NewsItem};

pub(super) const NEWS: &[ContentBlock] = &[ContentBlock::News(ITEMS)];

const ITEMS: &[NewsItem] = &[
    NewsItem {
        heading: "Pegcetacoplan (Syfovre): The OAKS and DERBY Trials",
        body: "The OAKS and DERBY studies were two parallel, 24-month, multicenter, randomized, double-masked, sham-controlled Phase 3 trials designed to evaluate the efficacy and safety of intravitreal pegcetacoplan in patients with GA. At 24 months, treatment with pegcetacoplan demonstrated a statistically significant reduction in the rate of GA lesion growth compared to sham, with an increasing effect over time. This anatomical benefit did not translate to a statistically significant preservation of visual function within the study period, and treatment was associated with an increased rate of conversion to neovascular (wet) AMD.",
        citation: "Heier, J. S., et al. (2023). Pegcetacoplan for the treatment of geographic atrophy... The Lancet, 402(10411), 1434-1448.",
        doi: Some("10.1016/S0140-6736(23)01526-X"),
    },
    NewsItem {
        heading: "Avacincaptad Pegol (Izervay): The GATHER2 Trial",
        body: "The GATHER2 study was a Phase 3 trial that evaluated the efficacy and safety of monthly intravitreal injections of avacincaptad pegol, a C5 inhibitor. The trial successfully met its primary endpoint, demonstrating a statistically significant reduction in the rate of GA lesion growth of approximately 14% compared to sham over 12 months. The safety profile was generally favorable, though treatment was associated with an increased risk of macular neovascularization.",
        citation: "Jaffe, G. J., et al. (2023). Efficacy and safety of avacincaptad pegol in patients with geographic atrophy (GATHER2)... The Lancet, 402(10411), 1449-1458.",
        doi: Some("10.1016/S0140-6736(23)01583-0"),
    },
    NewsItem {
        heading: "Deep-Learning Quantification of OCT in the FILLY Trial",
        body: "A post-hoc analysis of the Phase 2 FILLY trial employed a deep-learning model to analyze OCT scans, allowing for independent measurement of RPE loss and photoreceptor degeneration (PRD). The analysis confirmed that pegcetacoplan slowed the rate of RPE loss and identified that the presence of isolated PRD at baseline was a strong predictor of subsequent GA lesion growth, establishing a novel OCT-based biomarker for high-risk patients.",
        citation: "Fu, D. J., et al. (2024). Deep-learning automated quantification of longitudinal OCT scans... British Journal of Ophthalmology, 108(4), 536-545.",
        doi: Some("10.1136/bjo-2022-322672"),
    },
    NewsItem {
        heading: "Ixo-vec (Adverum Biotechnologies) for Neovascular AMD",
        body: "Adverum is advancing its gene therapy candidate, Ixo-vec, into a large-scale Phase 3 program for wet AMD. Promising results from Phase 1 and 2 trials demonstrated that a single intravitreal injection of Ixo-vec, which expresses the anti-VEGF protein aflibercept, resulted in a durable therapeutic effect, with patients showing a dramatic reduction in the need for supplemental anti-VEGF injections over several years.",
        citation: "Research in late-stage clinical development (e.g., ARTEMIS, NCT06856577); peer-reviewed publication of pivotal trial results is pending.",
        doi: None,
    },
    NewsItem {
        heading: "GT005 (Gyroscope Therapeutics) for Geographic Atrophy",
        body: "Representing a personalized approach, GT005 is a gene therapy designed for a subset of GA patients with specific genetic risk factors. The therapy uses an AAV vector to increase the production of Complement Factor I (CFI). A Phase 2 trial is evaluating its efficacy in GA patients who carry rare genetic variants in the CFI gene associated with low CFI protein levels.",
        citation: "Research is ongoing in Phase 2 clinical trials; results are anticipated in the coming years.",
        doi: None,
    },
    NewsItem {
        heading: "Longitudinal Dynamics and Gene-Specific Fitness of CHIP Mutations",
        body: "A pivotal study in Nature Medicine analyzed longitudinal blood samples to measure the growth rates of different CHIP mutations. The study revealed that gene identity is a primary determinant of clonal fitness, with mutations in genes like SF3B1, SRSF2, and TP53 conferring a significantly higher fitness advantage and faster clonal expansion compared to more common mutations in DNMT3A and TET2.",
        citation: "Robertson, N. A., et al. (2022). Longitudinal dynamics of clonal hematopoiesis identifies gene-specific fitness effects. Nature Medicine, 28(7), 1439-1446.",
        doi: Some("10.1038/s41591-022-01883-3"),
    },
    NewsItem {
        heading: "Cost-Effective Longitudinal Profiling of CHIP Dynamics",
        body: "A study in Immunity & Ageing developed a cost-effective sequencing assay to track clonal dynamics over long periods. They found that the majority of clones (52.1%) expanded over time, with a median doubling period of 7.43 years, and showed that once a clone reaches the conventional CHIP detection threshold (variant allele fraction ≥ 2%), it generally continues to grow.",
        citation: "Uddin, M. M., et al. (2022). Longitudinal profiling of clonal hematopoiesis provides insight into clonal dynamics. Immunity & Ageing, 19(1), 23.",
        doi: Some("10.1186/s12979-022-00278-9"),
    },
    NewsItem {
        heading: "Single-Cell Multi-omics Reveal Phenotypes of DNMT3A Mutations",
        body: "A study in Nature Genetics used a single-cell multi-omics approach to link genotype to phenotype in individuals with CHIP. They discovered that the DNMT3A R882 mutation biases stem cell differentiation toward the myeloid lineage by causing targeted hypomethylation at specific DNA motifs enriched for hematopoietic transcription factor binding sites.",
        citation: "Nam, A. S., et al. (2022). Single-cell multi-omics of human clonal hematopoiesis... Nature Genetics, 54(10), 1514-1526.",
        doi: Some("10.1038/s41588-022-01179-9"),
    },
    NewsItem {
        heading: "Distinct Epigenetic Signatures of DNMT3A and TET2 CHIP",
        body: "An EWAS in Nature Communications found that mutations in the two most common CHIP genes, DNMT3A and TET2, have distinct and opposing effects on the methylome. Despite these molecular differences, both mutations enhance stem cell self-renewal, and Mendelian randomization suggested associated methylation changes may be causally linked to increased coronary artery disease risk.",
        citation: "Uddin, M. M., et al. (2022). Clonal hematopoiesis of indeterminate potential, DNA methylation, and risk for coronary artery disease. Nature Communications, 13(1), 5350.",
        doi: Some("10.1038/s41467-022-33093-3"),
    },
    NewsItem {
        heading: "TP53-Mediated CHIP and Doxorubicin-Induced Cardiomyopathy",
        body: "A study in JCI Insight using a mouse model found that mice with Trp53-mutant hematopoietic cells experienced significantly worse cardiac toxicity after treatment with doxorubicin. The mechanism involved an amplified inflammatory response, with increased neutrophil infiltration into the heart muscle, suggesting that therapy-related CHIP can directly contribute to heart failure risk in cancer survivors.",
        citation: "Sano, S., et al. (2021). TP53-mediated therapy-related clonal hematopoiesis contributes to doxorubicin-induced cardiomyopathy... JCI Insight, 6(16), e146076.",
        doi: Some("10.1172/jci.insight.146076"),
    },
    NewsItem {
        heading: "JAK2-Mediated CHIP Accelerates Heart Failure",
        body: "A study in JACC: Basic to Translational Science developed a mouse model where the JAK2 V617F mutation was expressed in myeloid cells. These mice exhibited accelerated pathological remodeling and heart failure in response to cardiac stress, a mechanism involving heightened myocardial inflammation, demonstrating that JAK2-mutated myeloid cells are pro-inflammatory.",
        citation: "Sano, S., et al. (2019). JAK2V617F-Mediated Clonal Hematopoiesis Accelerates Pathological Remodeling in Murine Heart Failure. JACC: Basic to Translational Science, 4(6), 684-697.",
        doi: Some("10.1016/j.jacbts.2019.05.013"),
    },
    NewsItem {
        heading: "Somatic Mutation as an Explanation for Epigenetic Aging",
        body: "This landmark study in Nature Aging discovered that a single age-related mutation event (C>T at methylated CpG sites) is associated with predictable remodeling of the surrounding methylation landscape. This allowed the construction of a \"mutation clock\" that predicts chronological age with accuracy comparable to epigenetic clocks, suggesting that epigenetic aging is largely a downstream readout of cumulative somatic mutation burden.",
        citation: "Koch, Z., et al. (2024). Somatic mutation as an explanation for epigenetic aging. Nature Aging, 5, 709-719.",
        doi: Some("10.1038/s43587-024-00794-x"),
    },
    NewsItem {
        heading: "Transcriptomic Consequences of CRISPR-Mediated Y-Chromosome Elimination",
        body: "A 2024 study in Scientific Reports used CRISPR/Cas9 to eliminate the Y chromosome from a human male retinal cell line. RNA-sequencing revealed significant expression changes in hundreds of autosomal genes involved in cell migration, angiogenesis, and immune responses, providing the first direct experimental proof that loss of Y is not a passive biomarker but an active driver of pro-disease cellular states.",
        citation: "Celli, L., et al. (2024). CRISPR/Cas9 mediated Y-chromosome elimination affects human cells transcriptome. Scientific Reports, 14(1), 2119.",
        doi: Some("10.1038/s41598-024-53549-9"),
    },
    NewsItem {
        heading: "Mosaic Loss of Y Chromosome in Brain Microglia",
        body: "A recent preprint study provided the first evidence of mosaic loss of the Y chromosome (mLOY) occurring within brain cells, specifically microglia. Researchers found that nearly 8% of microglia from older men showed evidence of LOY, and this was associated with the dysregulation of genes involved in inflammatory response and lipoprotein metabolism, pathways strongly linked to Alzheimer's disease.",
        citation: "Dumanski, J. P., et al. (2021). Mosaic loss of chromosome Y in migratory human microglia and its role in Alzheimer's disease. bioRxiv.",
        doi: Some("10.1101/2021.11.19.469312"),
    },
    NewsItem {
        heading: "A LINE-1 Element Drives Escape from X-Inactivation at KDM5C",
        body: "A study in Human Molecular Genetics discovered that the ability of the gene KDM5C to escape X-chromosome inactivation is driven by a LINE-1 retrotransposon located within the gene's first intron. This reveals a novel mechanism whereby mobile genetic elements can influence gene expression and contribute to phenotypic diversity between sexes.",
        citation: "Balaton, B. P., et al. (2024). Escape from X-chromosome inactivation at KDM5C is driven by a LINE-1 element. Human Molecular Genetics, 33(11), 978-988.",
        doi: Some("10.1093/hmg/ddae031"),
    },
    NewsItem {
        heading: "Causal Relationship Between Telomere Length and mtDNA Copy Number",
        body: "A 2024 study in Aging used bidirectional Mendelian randomization and found a significant, one-way causal effect where genetically predicted shorter telomere length was causally associated with a decrease in mitochondrial DNA (mtDNA) copy number. This establishes a causal hierarchy, suggesting nuclear genome instability is an upstream event that drives mitochondrial depletion in aging.",
        citation: "Zhang, Y., et al. (2024). New insights from bidirectional Mendelian randomization... Aging, 16(10), 8345-8356.",
        doi: Some("10.18632/aging.205728"),
    },
    NewsItem {
        heading: "Maternal Age and Purifying Selection of mtDNA Mutations",
        body: "A study in Nature Aging showed that purifying selection, a process that removes harmful mutations, occurs during oocyte maturation to prevent the transmission of pathogenic mtDNA variants to offspring. This selection process was found to be enhanced with maternal age, providing a mechanism to counteract the increased risk of accumulating mutations over time.",
        citation: "Ru, Y., et al. (2024). Maternal age enhances purifying selection on pathogenic mutations... Nature Aging, 4(9), 1211-1230.",
        doi: Some("10.1038/s43587-024-00672-6"),
    },
    NewsItem {
        heading: "Dynamics of mtDNA Mosaicism in Somatic Cells",
        body: "Research in Nature Communications provided a comprehensive look at mtDNA mosaicism by sequencing thousands of single-cell-derived clones. This work provided fundamental parameters for the mtDNA mutation rate (5.0 × 10^-8 per base pair) and turnover frequency (10–20 times per year), which shape the landscape of mtDNA mosaicism over a lifetime.",
        citation: "Ju, Y. S., et al. (2023). Mitochondrial DNA mosaicism in normal human somatic cells. Nature Communications, 14(1), 1234.",
        doi: Some("10.1038/s41467-023-36873-z"),
    },
    NewsItem {
        heading: "mtDNA Replication is Essential for Neurogenesis",
        body: "A study in Development Growth & Regeneration found that inhibiting mtDNA replication specifically impaired the generation of new neurons (neurogenesis) but did not affect the generation of glial cells. This suggests that mtDNA replication is essential for neuronal fate commitment, through mechanisms independent of simple energy production.",
        citation: "Hroudová, J., et al. (2024). Mitochondrial DNA replication is essential for neurogenesis... Development, Growth & Differentiation.",
        doi: Some("10.1111/dgd.12903"),
    },
    NewsItem {
        heading: "Mitochondrial Nucleotide Transport and Metabolism",
        body: "A review in Cell Metabolism highlights the complex mechanisms that supply mitochondria with nucleotides for mtDNA replication. Disturbance of this homeostasis can lead to a decline in mtDNA abundance and integrity, causing severe mitochondrial diseases, and is also relevant to physiological processes like the innate immune response.",
        citation: "Van der Verren, S. E., et al. (2024). High tide or low tide: the transport and metabolism of mitochondrial nucleotides. Cell Metabolism, 36(8), 1635-1653.",
        doi: Some("10.1016/j.cmet.2024.07.005"),
    },
];
