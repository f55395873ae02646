//! Current research: thesis summary, side projects and references

use folio_core::ContentBlock;

pub(super) const RESEARCH: &[ContentBlock] = &[
    ContentBlock::Paragraph(
        "My current research, which has been submitted for defence at the University of Aberdeen, focuses on the role of chromosomal abundance in risk and prognosis of age-related macular degeneration.",
    ),
    ContentBlock::Paragraph(
        "Age-related macular degeneration (AMD) is a multifactorial and progressive disorder that primarily targets the macula, the central region of the retina. It represents the leading cause of irreversible central vision loss in individuals over 55 years of age in Western populations [1]. Globally, AMD currently affects more than 200 million people, and this figure is projected to increase by approximately 88 million within the next decade [1].",
    ),
    ContentBlock::Paragraph(
        "A key pathological feature of AMD is the development of small yellow deposits, known as drusen, which accumulate between the retinal pigment epithelium (RPE) and the choroid. These deposits consist mainly of proteins, lipids, and other cellular remnants. The size of drusen and the degeneration of photoreceptors and RPE cells are central to disease classification [2]. AMD is clinically categorized into three stages: early, intermediate, and late. The late stage is further subdivided into geographic atrophy (GA) and choroidal neovascular AMD (CNV). Early AMD is characterized by intermediate-sized drusen without pigmentary abnormalities, whereas intermediate AMD presents with large drusen and/or pigmentary changes. In the late stage, disease progression results in either CNV or GA. GA involves the partial to complete loss of photoreceptors, the RPE, and the choriocapillaris, leading to the formation of atrophic lesions that vary in size, number, and position but typically enlarge at a rate of 1.3–2.6 mm² per year [3–6]. GA accounts for approximately 35–40% of late AMD cases, most commonly affecting individuals older than 85 years [7,8]. In contrast, CNV progresses more rapidly, characterized by the growth of abnormal blood vessels beneath the retina, resulting in fluid leakage and potential retinal damage if untreated [9]. Fortunately, CNV can be managed through intravitreal injections of anti-vascular endothelial growth factor (anti-VEGF) agents.",
    ),
    ContentBlock::Paragraph(
        "Over the past decade, significant research has uncovered multiple AMD risk factors. Age remains the most influential determinant, while genetic predisposition, smoking, and body mass index (BMI) also play substantial roles [10]. The influence of gender on AMD susceptibility remains under discussion within the scientific community [11]. A major genome-wide association study (GWAS) conducted by the International AMD Genomics Consortium (IAMDGC) in 2016 identified and confirmed numerous risk variants, bringing the total to 52 independent variants across 34 genomic loci [11–13]. Subsequent meta-analyses incorporating diverse cohorts have revealed additional variants, albeit with smaller effect sizes. These studies have implicated several biological pathways—particularly those involving the complement system, extracellular matrix regulation, and lipid metabolism—which collectively account for roughly half of AMD’s heritable risk [12].",
    ),
    ContentBlock::Paragraph(
        "Recent findings have emphasized the role of mosaicism in age-related health conditions. Mosaicism refers to the coexistence of two or more genetically distinct cell populations within an organism. The extent and size of these genetic alterations influence their phenotypic impact. Among mosaic events, the most extensively studied is the mosaic loss of the Y chromosome (mLOY) in aging males [15], which occurs in up to 40% of elderly men [16]. Notably, mLOY has been linked to increased all-cause mortality, Alzheimer’s disease, cancer, and advanced AMD [15,17–22].",
    ),
    ContentBlock::Paragraph(
        "Building on these observations, our study investigates the association between somatic chromosomal abundance and AMD risk in both sexes. We derive a continuous measure of mosaic sex chromosome loss from genotyping intensity data from the IAMDGC and UK Biobank cohorts. Furthermore, we assess how somatic chromosomal variation influences the progression and severity of geographic atrophy, with a focus on GA lesion size and annual growth rate.",
    ),
    ContentBlock::Rule,
    ContentBlock::Heading("Other Research Projects"),
    ContentBlock::Paragraph("Other projects include:"),
    ContentBlock::Numbered(OTHER_PROJECTS),
    ContentBlock::Rule,
    ContentBlock::Heading("References"),
    ContentBlock::Numbered(REFERENCES),
];

const OTHER_PROJECTS: &[&str] = &[
    "The genetic architecture of Geographic Atrophy Progression.",
    "Exploring the atlas of genetic risk scores in relationship to age-related macular degeneration.",
    "Exploring the role of different genes in eye-related diseases, and retina health.",
    "Utilising machine learning to predict disease outcomes and physiological traits.",
];

const REFERENCES: &[&str] = &[
    "Wong WL, Su X, Li X, Cheung CMG, Klein R, Cheng CY, et al. Global prevalence of age-related macular degeneration and disease burden projection for 2020 and 2040: a systematic review and meta-analysis. Lancet Glob Health. 2014 Feb;2(2):e106–16.",
    "Ferris FL, Wilkinson CP, Bird A, Chakravarthy U, Chew E, Csaky K, et al. Clinical Classification of Age-related Macular Degeneration. Ophthalmology. 2013 Apr;120(4):844–51.",
    "The AREDS Research Group. Change in Area of Geographic Atrophy in the Age-Related Eye Disease Study. Archives of Ophthalmology. 2009 Sep 14;127(9):1168.",
    "Fleckenstein M, Schmitz-Valckenberg S, Adrion C, Visvalingam S, Göbel AP, Mössner A, et al. Progression of Age-Related Geographic Atrophy: Role of the Fellow Eye. Investigative Opthalmology & Visual Science. 2011 Aug 22;52(9):6552.",
    "Fleckenstein M, Adrion C, Schmitz-Valckenberg S, Göbel AP, Bindewald-Wittich A, Scholl HPN, et al. Concordance of Disease Progression in Bilateral Geographic Atrophy Due to AMD. Investigative Opthalmology & Visual Science. 2010 Feb 1;51(2):637.",
    "Klein ML, Ferris FL, Francis PJ, Lindblad AS, Chew EY, Hamon SC, et al. Progression of Geographic Atrophy and Genotype in Age-Related Macular Degeneration. Ophthalmology. 2010 Aug;117(8):1554-1559.e1.",
    "Klein R, Klein BEK, Knudtson MD, Meuer SM, Swift M, Gangnon RE. Fifteen-Year Cumulative Incidence of Age-Related Macular Degeneration. Ophthalmology. 2007 Feb;114(2):253–62.",
    "Augood CA. Prevalence of Age-Related Maculopathy in Older Europeans. Archives of Ophthalmology. 2006 Apr 1;124(4):529.",
    "Lim LS, Mitchell P, Seddon JM, Holz FG, Wong TY. Age-related macular degeneration. The Lancet. 2012 May;379(9827):1728–38.",
    "Grassmann F, Fauser S, Weber BHF. The genetics of age-related macular degeneration (AMD) – Novel targets for designing treatment options? European Journal of Pharmaceutics and Biopharmaceutics [Internet]. 2015 Sep;95:194–202. Available from: https://linkinghub.elsevier.com/retrieve/pii/S0939641115002271",
    "Winkler TW, Brandl C, Grassmann F, Gorski M, Stark K, Loss J, et al. Investigating the modulation of genetic effects on late AMD by age and sex: Lessons learned and two additional loci. PLoS One [Internet]. 2018 Mar 12;13(3):e0194321. Available from: https://dx.plos.org/10.1371/journal.pone.0194321",
    "Fritsche LG, Igl W, Bailey JNC, Grassmann F, Sengupta S, Bragg-Gresham JL, et al. A large genome-wide association study of age-related macular degeneration highlights contributions of rare and common variants. Nat Genet [Internet]. 2016 Feb 21;48(2):134–43. Available from: http://www.nature.com/articles/ng.3448",
    "Grassmann F, Heid IM, Weber BHF. Recombinant Haplotypes Narrow the ARMS2/HTRA1 Association Signal for Age-Related Macular Degeneration. Genetics [Internet]. 2017 Feb 1;205(2):919–24. Available from: https://academic.oup.com/genetics/article/205/2/919/6066453",
    "Gorski M, Grunin M, Herold JM, Fröhlich B, Behr M, Wheeler N, et al. Diverse ancestry GWAS for advanced age-related macular degeneration in TOPMed-imputed and Ophthalmologically-confirmed 16,108 cases and 18,038 controls. 2024.",
    "Francis M, Gorman BR, Bigdeli TB, Genovese G, Voloudakis G, Bendl J, et al. Multi-ancestry genome-wide association meta-analysis of mosaic loss of chromosome Y in the Million Veteran Program identifies 240 novel loci. 2024.",
    "Han X, Gharahkhani P, Mitchell P, Liew G, Hewitt AW, MacGregor S. Genome-wide meta-analysis identifies novel loci associated with age-related macular degeneration. J Hum Genet. 2020 Aug 10;65(8):657–65.",
    "Jacobs KB, Yeager M, Zhou W, Wacholder S, Wang Z, Rodriguez-Santiago B, et al. Detectable clonal mosaicism and its relationship to aging and cancer. Nat Genet [Internet]. 2012 Jun 6;44(6):651–8. Available from: http://www.nature.com/articles/ng.2270",
    "Forsberg LA. Loss of chromosome Y (LOY) in blood cells is associated with increased risk for disease and mortality in aging men. Hum Genet [Internet]. 2017 May 19;136(5):657–63. Available from: http://link.springer.com/10.1007/s00439-017-1799-2",
    "Thompson DJ, Genovese G, Halvardson J, Ulirsch JC, Wright DJ, Terao C, et al. Genetic predisposition to mosaic Y chromosome loss in blood. Nature [Internet]. 2019 Nov 28;575(7784):652–7. Available from: http://www.nature.com/articles/s41586-019-1765-3",
    "Noveski P, Madjunkova S, Sukarova Stefanovska E, Matevska Geshkovska N, Kuzmanovska M, Dimovski A, et al. Loss of Y Chromosome in Peripheral Blood of Colorectal and Prostate Cancer Patients. PLoS One [Internet]. 2016 Jan 8;11(1):e0146264. Available from: https://dx.plos.org/10.1371/journal.pone.0146264",
    "Forsberg LA, Gisselsson D, Dumanski JP. Mosaicism in health and disease — clones picking up speed. Nat Rev Genet [Internet]. 2017 Feb 12;18(2):128–42. Available from: http://www.nature.com/articles/nrg.2016.145",
    "Forsberg LA, Rasi C, Malmqvist N, Davies H, Pasupulati S, Pakalapati G, et al. Mosaic loss of chromosome Y in peripheral blood is associated with shorter survival and higher risk of cancer. Nat Genet [Internet]. 2014 Jun 28;46(6):624–8. Available from: http://www.nature.com/articles/ng.2966",
];
