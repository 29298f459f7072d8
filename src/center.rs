use crate::error::CenterError;
use crate::layout::RecordLayout;
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Mean position of all the qualifying records.
///
/// Produced once, at the end of the pass, and only if at least one record
/// contributed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// Number of records that contributed to the mean.
    pub n_records: usize,
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Running sums of the coordinates seen so far.
struct Accumulator {
    coord_sums: [f64; 3],
    n_records: usize,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            coord_sums: [0.0; 3],
            n_records: 0,
        }
    }

    fn add(&mut self, coords: [f64; 3]) {
        for (sum, coord) in self.coord_sums.iter_mut().zip(coords) {
            *sum += coord;
        }
        self.n_records += 1;
    }

    fn mean(self) -> Result<Center, CenterError> {
        // The mean is undefined for an empty accumulator.
        if self.n_records == 0 {
            return Err(CenterError::EmptyInput);
        }

        let n = self.n_records as f64;
        Ok(Center {
            x: self.coord_sums[0] / n,
            y: self.coord_sums[1] / n,
            z: self.coord_sums[2] / n,
            n_records: self.n_records,
        })
    }
}

/// Compute the center of mass of the qualifying records in a text source.
///
/// Reads the source line by line in a single pass: lines starting with the
/// layout's marker have their coordinates extracted and accumulated, all
/// other lines are ignored. The first malformed qualifying line aborts the
/// whole computation.
pub fn center_of_reader<R: BufRead>(
    reader: R,
    layout: &RecordLayout,
) -> Result<Center, CenterError> {
    let mut acc = Accumulator::new();

    for (i_line, line) in reader.lines().enumerate() {
        let line_num = i_line + 1;
        let line = line.map_err(|source| CenterError::Io {
            line: line_num,
            source,
        })?;

        if !layout.matches(&line) {
            continue;
        }

        acc.add(layout.parse_coords(&line, line_num)?);
    }

    acc.mean()
}

/// Compute the center of mass of the qualifying records in a file.
///
/// The file handle is scoped to this call and released on every exit path.
pub fn center_of_file<P: AsRef<Path>>(
    file: P,
    layout: &RecordLayout,
) -> Result<Center, CenterError> {
    let file = file.as_ref();
    let file = File::open(file).map_err(|source| CenterError::NotFound {
        path: file.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    center_of_reader(reader, layout)
}
