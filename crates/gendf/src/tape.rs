// standard library
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

// external crates
use log::{debug, info, trace};

// internal modules
use crate::error::{Error, Result};
use crate::parsers::read_identifiers;

/// Read access to the sections of one evaluated material
///
/// This is everything the [Gendf](crate::Gendf) aggregator needs to know
/// about the layout of a tape, so any other source of section lines can be
/// plugged in instead of a [Tape].
pub trait EvaluationSource {
    /// Descriptive title of the evaluation
    fn title(&self) -> &str;

    /// Material number (MAT)
    fn material_number(&self) -> i32;

    /// File types (MF) present, in ascending order
    fn file_numbers(&self) -> Vec<u32>;

    /// Reaction types (MT) present in file `mf`, in ascending order
    fn section_numbers(&self, mf: u32) -> Vec<u32>;

    /// Raw lines of a section, HEAD through SEND
    fn section(&self, mf: u32, mt: u32) -> Option<&[String]>;
}

/// One material from a GENDF tape
///
/// Sections are keyed by `(MF, MT)` and hold the card images in tape order,
/// including the SEND record that closes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Material {
    title: String,
    mat: i32,
    sections: BTreeMap<(u32, u32), Vec<String>>,
}

impl Material {
    fn new(mat: i32, title: &str) -> Self {
        Self {
            title: title.to_string(),
            mat,
            sections: BTreeMap::new(),
        }
    }

    /// Total number of sections in the material
    pub fn n_sections(&self) -> usize {
        self.sections.len()
    }
}

impl EvaluationSource for Material {
    fn title(&self) -> &str {
        &self.title
    }

    fn material_number(&self) -> i32 {
        self.mat
    }

    fn file_numbers(&self) -> Vec<u32> {
        let mut files: Vec<u32> = self.sections.keys().map(|(mf, _)| *mf).collect();
        files.dedup();
        files
    }

    fn section_numbers(&self, mf: u32) -> Vec<u32> {
        self.sections
            .range((mf, 0)..=(mf, u32::MAX))
            .map(|((_, mt), _)| *mt)
            .collect()
    }

    fn section(&self, mf: u32, mt: u32) -> Option<&[String]> {
        self.sections.get(&(mf, mt)).map(|lines| lines.as_slice())
    }
}

/// A GENDF tape split into materials and sections
///
/// Only the MAT/MF/MT identifiers in columns 67-75 are used to split the
/// tape, the content of each section is left to the section parsers.
///
/// | Record | MAT | MF  | MT  | Meaning                       |
/// | ------ | --- | --- | --- | ----------------------------- |
/// | TPID   | any | 0   | 0   | first line, tape title        |
/// | SEND   | mat | mf  | 0   | kept as last line of section  |
/// | FEND   | mat | 0   | 0   | end of file                   |
/// | MEND   | 0   | 0   | 0   | end of material               |
/// | TEND   | -1  | 0   | 0   | end of tape                   |
///
/// Blank lines are skipped.
///
/// ```rust
/// # use groupy_gendf::{EvaluationSource, Tape};
/// let tape = Tape::from_file("./data/one_group.gendf").unwrap();
/// assert_eq!(tape.title(), "one group hydrogen");
/// assert_eq!(tape.material_numbers(), vec![125]);
///
/// let material = tape.first_material().unwrap();
/// assert_eq!(material.file_numbers(), vec![1, 3, 6]);
/// assert_eq!(material.section_numbers(3), vec![1, 2, 102]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tape {
    title: String,
    materials: Vec<Material>,
}

impl Tape {
    /// Read and split a GENDF tape
    ///
    /// Fails with [Error::MissingFile] before anything is read if the path
    /// does not exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingFile {
                path: path.to_path_buf(),
            });
        }

        info!("Reading {}", path.display());
        std::fs::read_to_string(path)?.parse()
    }

    /// Title from the tape identification record
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Material numbers in the order they appear on the tape
    pub fn material_numbers(&self) -> Vec<i32> {
        self.materials.iter().map(|m| m.mat).collect()
    }

    /// Find a material by number
    pub fn material(&self, mat: i32) -> Option<&Material> {
        self.materials.iter().find(|m| m.mat == mat)
    }

    /// The first material on the tape
    pub fn first_material(&self) -> Result<&Material> {
        self.materials.first().ok_or(Error::NoMaterials)
    }
}

impl FromStr for Tape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().filter(|l| !l.trim().is_empty()).peekable();
        let mut tape = Tape::default();

        // the tape identification is optional
        if let Some(&first) = lines.peek() {
            if let (_, 0, 0) = read_identifiers(first)? {
                tape.title = first.chars().take(66).collect::<String>().trim().to_string();
                debug!("Title       = {}", tape.title);
                lines.next();
            }
        }

        let mut current: Option<Material> = None;
        let mut last: Option<(u32, u32)> = None;

        for line in lines {
            let (mat, mf, mt) = read_identifiers(line)?;

            match (mat, mf, mt) {
                // TEND
                (-1, _, _) => break,
                // MEND
                (0, _, _) => {
                    tape.materials.extend(current.take());
                    last = None;
                }
                // FEND
                (_, 0, _) => last = None,
                // SEND
                (_, _, 0) => {
                    let material = current.as_mut().filter(|m| m.mat == mat);
                    match (material, last) {
                        (Some(m), Some(key)) if key.0 == mf => {
                            m.sections.entry(key).or_default().push(line.to_string());
                        }
                        _ => trace!("Stray SEND record for MAT{mat} MF{mf}"),
                    }
                    last = None;
                }
                _ => {
                    // a new MAT without a MEND still starts a new material
                    if current.as_ref().is_some_and(|m| m.mat != mat) {
                        tape.materials.extend(current.take());
                    }
                    let material = current.get_or_insert_with(|| Material::new(mat, &tape.title));
                    material
                        .sections
                        .entry((mf, mt))
                        .or_default()
                        .push(line.to_string());
                    last = Some((mf, mt));
                }
            }
        }
        tape.materials.extend(current);

        for m in &tape.materials {
            debug!("MAT{:<6}     = {} sections", m.mat, m.n_sections());
        }
        Ok(tape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::cards::{cont, send, values};
    use groupy_utils::f;

    fn tend() -> String {
        f!("{:66}{:>4}{:>2}{:>3}{:>5}", "", -1, 0, 0, 0)
    }

    fn mend() -> String {
        f!("{:66}{:>4}{:>2}{:>3}{:>5}", "", 0, 0, 0, 0)
    }

    fn fend(mat: i32) -> String {
        f!("{:66}{mat:>4}{:>2}{:>3}{:>5}", "", 0, 0, 0)
    }

    fn material(mat: i32) -> Vec<String> {
        vec![
            cont([1001.0, 0.9991673], [0, 1, -1, 1], mat, 1, 451),
            values(&[0.0, 1e10, 1e-5, 2e7], mat, 1, 451),
            send(mat, 1),
            fend(mat),
            cont([1001.0, 0.9991673], [1, 1, 0, 1], mat, 3, 1),
            values(&[1.0, 20.0], mat, 3, 1),
            send(mat, 3),
            cont([1001.0, 0.9991673], [1, 1, 0, 1], mat, 3, 102),
            values(&[1.0, 0.04], mat, 3, 102),
            send(mat, 3),
            fend(mat),
            mend(),
        ]
    }

    fn tape(mats: &[i32]) -> String {
        let mut lines = vec![f!("{:66}{:>4}{:>2}{:>3}{:>5}", "  my tape title", 1, 0, 0, 0)];
        for mat in mats {
            lines.extend(material(*mat));
        }
        lines.push(tend());
        lines.join("\n")
    }

    #[test]
    fn split_sections() {
        let tape: Tape = tape(&[125]).parse().unwrap();
        assert_eq!(tape.title(), "my tape title");
        assert_eq!(tape.material_numbers(), vec![125]);

        let material = tape.first_material().unwrap();
        assert_eq!(material.title(), "my tape title");
        assert_eq!(material.material_number(), 125);
        assert_eq!(material.file_numbers(), vec![1, 3]);
        assert_eq!(material.section_numbers(3), vec![1, 102]);
        assert!(material.section_numbers(6).is_empty());
        assert_eq!(material.n_sections(), 3);
    }

    #[test]
    fn send_closes_the_section() {
        let tape: Tape = tape(&[125]).parse().unwrap();
        let section = tape.first_material().unwrap().section(3, 102).unwrap();
        assert_eq!(section.len(), 3);
        assert_eq!(section[2], send(125, 3));
    }

    #[test]
    fn several_materials() {
        let tape: Tape = tape(&[125, 128]).parse().unwrap();
        assert_eq!(tape.material_numbers(), vec![125, 128]);
        assert!(tape.material(128).is_some());
        assert!(tape.material(9237).is_none());
        assert_eq!(tape.first_material().unwrap().material_number(), 125);
    }

    #[test]
    fn missing_material_end() {
        // MEND dropped between the two materials
        let mut lines = vec![f!("{:66}{:>4}{:>2}{:>3}{:>5}", "title", 1, 0, 0, 0)];
        lines.extend(material(125).into_iter().filter(|l| *l != mend()));
        lines.extend(material(128));
        let tape: Tape = lines.join("\n").parse().unwrap();
        assert_eq!(tape.material_numbers(), vec![125, 128]);
    }

    #[test]
    fn blank_lines_and_no_title() {
        let lines = material(125);
        let text = f!("\n{}\n\n{}\n", lines[..3].join("\n"), lines[3..].join("\n"));
        let tape: Tape = text.parse().unwrap();
        assert_eq!(tape.title(), "");
        assert_eq!(tape.first_material().unwrap().n_sections(), 3);
    }

    #[test]
    fn empty_tape() {
        let tape: Tape = tape(&[]).parse().unwrap();
        assert!(tape.material_numbers().is_empty());
        assert!(matches!(tape.first_material(), Err(Error::NoMaterials)));
    }

    #[test]
    fn missing_file() {
        let result = Tape::from_file("./data/does_not_exist.gendf");
        assert!(matches!(result, Err(Error::MissingFile { .. })));
    }
}
