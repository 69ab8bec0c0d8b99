// src/sources.rs
//
// Curated bibliography of the supported papers and where their
// supplementary tables live. The service layer uses these as default fetch
// parameters; they are also the citation record for anything this crate
// hands out.

use serde::Serialize;

/// Where one table of a paper can be fetched.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataLink {
    pub table: &'static str,
    /// Remote ASCII copy as published.
    pub url: &'static str,
    /// Repository-relative local fallback, preferred when present on disk.
    pub local: Option<&'static str>,
}

/// One supported paper.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaperSource {
    pub id: &'static str,
    pub title: &'static str,
    pub authors: &'static str,
    pub year: u16,
    pub doi: &'static str,
    pub paper_link: &'static str,
    pub instrument: Option<&'static str>,
    pub data_links: &'static [DataLink],
}

pub static PAPERS: &[PaperSource] = &[
    PaperSource {
        id: "dotson2010",
        title: "350 μm Polarimetry from the Caltech Submillimeter Observatory",
        authors: "J. L. Dotson, J. E. Vaillancourt, L. Kirby et al.",
        year: 2010,
        doi: "10.1088/0067-0049/186/2/406",
        paper_link: "https://iopscience.iop.org/article/10.1088/0067-0049/186/2/406",
        instrument: Some("CSO / Hertz 350 μm polarimeter"),
        data_links: &[
            DataLink {
                table: "t1",
                url: "https://iopscience.iop.org/0067-0049/186/2/406/suppdata/apjs333144t1_ascii.txt?doi=10.1088/0067-0049/186/2/406",
                local: Some("datafiles/polarization/dotson2010_t1.txt"),
            },
            DataLink {
                table: "t2",
                url: "https://content.cld.iop.org/journals/0067-0049/186/2/406/revision1/apjs333144t2_mrt.txt",
                local: Some("datafiles/polarization/dotson2010_t2.txt"),
            },
        ],
    },
    PaperSource {
        id: "matthews2009",
        title: "The Legacy of SCUPOL: 850 μm Imaging Polarimetry from 1997 to 2005",
        authors: "B. C. Matthews, C. A. McPhee, L. M. Fissel, R. L. Curran",
        year: 2009,
        doi: "10.1088/0067-0049/182/1/143",
        paper_link: "https://iopscience.iop.org/article/10.1088/0067-0049/182/1/143",
        instrument: Some("JCMT / SCUPOL 450 μm & 850 μm"),
        data_links: &[DataLink {
            table: "t6",
            url: "https://content.cld.iop.org/journals/0067-0049/182/1/143/revision1/apjs300733t6_mrt.txt",
            local: None,
        }],
    },
    PaperSource {
        id: "harris2018",
        title: "ALMA Observations of Polarized 872μm Dust Emission from the Protostellar Systems VLA 1623 and L1527",
        authors: "Robert J. Harris, Erin G. Cox, Leslie W. Looney, et al.",
        year: 2018,
        doi: "10.3847/1538-4357/aac6ec",
        paper_link: "https://iopscience.iop.org/article/10.3847/1538-4357/aac6ec",
        instrument: Some("ALMA Band 7"),
        data_links: &[
            DataLink {
                table: "t2",
                url: "https://iopscience.iop.org/0004-637X/861/2/91/suppdata/apjaac6ect2_ascii.txt?doi=10.3847/1538-4357/aac6ec",
                local: None,
            },
            DataLink {
                table: "t3",
                url: "https://iopscience.iop.org/0004-637X/861/2/91/suppdata/apjaac6ect3_ascii.txt?doi=10.3847/1538-4357/aac6ec",
                local: None,
            },
        ],
    },
    PaperSource {
        id: "crutcher2010",
        title: "Magnetic Fields in Interstellar Clouds from Zeeman Observations",
        authors: "R. M. Crutcher, B. Wandelt, C. Heiles, E. Falgarone, T. H. Troland",
        year: 2010,
        doi: "10.1088/0004-637X/725/1/466",
        paper_link: "https://iopscience.iop.org/article/10.1088/0004-637X/725/1/466",
        instrument: None,
        data_links: &[DataLink {
            table: "t1",
            url: "https://iopscience.iop.org/0004-637X/725/1/466/suppdata/apj366584t1_ascii.txt?doi=10.1088/0004-637X/725/1/466",
            local: Some("datafiles/zeeman/crutcher2010_t1.txt"),
        }],
    },
    PaperSource {
        id: "jijina1999",
        title: "Dense Cores Mapped in Ammonia: A Database",
        authors: "J. Jijina, P. C. Myers, Fred C. Adams",
        year: 1999,
        doi: "10.1086/313268",
        paper_link: "https://iopscience.iop.org/article/10.1086/313268",
        instrument: None,
        data_links: &[DataLink {
            table: "t2",
            url: "https://iopscience.iop.org/0067-0049/125/1/161/suppdata/apjs313268t2_ascii.txt?doi=10.1086/313268",
            local: Some("datafiles/gas/jijina1999_t2.txt"),
        }],
    },
    PaperSource {
        id: "liu2022",
        title: "Magnetic Fields in Star Formation: A Complete Compilation of All the DCF Estimations",
        authors: "Junhao Liu, Keping Qiu, Qizhou Zhang",
        year: 2022,
        doi: "10.3847/1538-4357/ac3911",
        paper_link: "https://iopscience.iop.org/article/10.3847/1538-4357/ac3911",
        instrument: None,
        data_links: &[DataLink {
            table: "t1",
            url: "https://content.cld.iop.org/journals/0004-637X/925/1/30/revision1/apjac3911t1_mrt.txt",
            local: Some("datafiles/processed/liu2022_t1.txt"),
        }],
    },
];

/// Paper metadata by source id.
pub fn paper(id: &str) -> Option<&'static PaperSource> {
    PAPERS.iter().find(|p| p.id == id)
}

/// Default fetch parameters for one (source, table) pair.
pub fn data_link(source: &str, table: &str) -> Option<&'static DataLink> {
    paper(source)?.data_links.iter().find(|l| l.table == table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::registry;

    #[test]
    fn every_registered_layout_has_a_data_link() {
        for layout in registry::all() {
            assert!(
                data_link(layout.source, layout.table).is_some(),
                "no data link for {}/{}",
                layout.source,
                layout.table
            );
        }
    }

    #[test]
    fn paper_metadata_serializes_as_citation_record() {
        let json = serde_json::to_value(paper("liu2022").unwrap()).unwrap();
        assert_eq!(json["doi"], "10.3847/1538-4357/ac3911");
        assert_eq!(json["data_links"][0]["table"], "t1");
        assert!(json["instrument"].is_null());
    }

    #[test]
    fn lookup_by_id_works() {
        assert_eq!(paper("liu2022").unwrap().year, 2022);
        assert!(paper("unknown").is_none());
        assert!(data_link("dotson2010", "t9").is_none());
    }
}
