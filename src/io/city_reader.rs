use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::{CityGraph, Weight};

pub type Result<T> = std::io::Result<T>;

/// One non-empty line of a city file: `City: Neighbor1(dist1), Neighbor2(dist2), ...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityLine {
    pub city: String,
    pub roads: Vec<(String, Weight)>,
}

pub trait GraphCityReader: Sized {
    fn try_read_cities<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_cities_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl GraphCityReader for CityGraph {
    fn try_read_cities<R: BufRead>(reader: R) -> Result<Self> {
        let mut graph = CityGraph::new();

        for line in CityReader::new(reader) {
            let CityLine { city, roads } = line?;
            graph.add_vertex(&city);
            for (neighbor, distance) in roads {
                graph.add_edge_by_name(&city, &neighbor, distance);
            }
        }

        debug_assert!(crate::errors::InvariantCheck::is_correct(&graph).is_ok());
        Ok(graph)
    }

    fn try_read_cities_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_cities(buf_reader)
    }
}

/// Iterates over the entries of a city file. Blank lines are skipped, a line without
/// neighbors declares an isolated city. Neighbors may be named before their own line.
pub struct CityReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> CityReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// One-based number of the line parsed most recently
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for CityReader<R> {
    type Item = Result<CityLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_city_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $info : expr) => {
        if !($cond) {
            return Err(invalid_data($line, $info));
        }
    };
}

impl<R: BufRead> CityReader<R> {
    fn next_non_empty_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_city_line(&mut self) -> Result<Option<CityLine>> {
        let Some(line) = self.next_non_empty_line()? else {
            return Ok(None);
        };

        let (city, rest) = line.split_once(':').unwrap_or((line.as_str(), ""));
        let city = city.trim();

        raise_error_unless!(!city.is_empty(), self.line_number, "Missing city name");

        let mut roads = Vec::new();
        for entry in rest.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (neighbor, distance) = self.parse_road(entry)?;

            raise_error_unless!(
                neighbor != city,
                self.line_number,
                format!("City \"{city}\" has a road to itself")
            );

            roads.push((neighbor.to_owned(), distance));
        }

        Ok(Some(CityLine {
            city: city.to_owned(),
            roads,
        }))
    }

    /// Parses `Neighbor(distance)`
    fn parse_road<'e>(&self, entry: &'e str) -> Result<(&'e str, Weight)> {
        let Some((neighbor, distance)) = entry
            .strip_suffix(')')
            .and_then(|inner| inner.split_once('('))
        else {
            return Err(invalid_data(
                self.line_number,
                format!("Expected \"Neighbor(distance)\", found \"{entry}\""),
            ));
        };

        let (neighbor, distance) = (neighbor.trim(), distance.trim());
        raise_error_unless!(
            !neighbor.is_empty(),
            self.line_number,
            format!("Missing neighbor name in \"{entry}\"")
        );

        let Ok(parsed) = distance.parse::<Weight>() else {
            return Err(invalid_data(
                self.line_number,
                format!("Invalid distance \"{distance}\" to \"{neighbor}\""),
            ));
        };

        raise_error_unless!(
            parsed > 0,
            self.line_number,
            format!("Distance to \"{neighbor}\" must be positive")
        );

        Ok((neighbor, parsed))
    }
}

fn invalid_data(line: usize, info: impl Display) -> std::io::Error {
    std::io::Error::new(ErrorKind::InvalidData, format!("Line {line}: {info}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::*;
    use std::io::Write;

    fn read(data: &str) -> Result<CityGraph> {
        CityGraph::try_read_cities(data.as_bytes())
    }

    #[test]
    fn test_success() {
        const DEMO_FILE: &str = "A: B(1), D(4)\n\nB: A(1), C(1)\n  C : B(1),D(1)  \nD: C(1), A(4)\nE\nF:\n";
        let graph = read(DEMO_FILE).unwrap();

        assert_eq!(graph.names(), ["A", "B", "D", "C", "E", "F"]);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.weight_of(0, 2), Some(4));
        assert_eq!(graph.weight_of(3, 2), Some(1));
        assert_eq!(graph.degree_of(4), 0);
        assert_eq!(graph.degree_of(5), 0);
    }

    #[test]
    fn lines_are_reported() {
        let entries: Vec<_> = CityReader::new("X: Y(2)\n\nY\n".as_bytes())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            entries,
            vec![
                CityLine {
                    city: "X".into(),
                    roads: vec![("Y".into(), 2)]
                },
                CityLine {
                    city: "Y".into(),
                    roads: vec![]
                }
            ]
        );
    }

    #[test]
    fn names_may_contain_spaces() {
        let graph = read("New York: Los Angeles ( 2789 )\n").unwrap();
        assert_eq!(graph.names(), ["New York", "Los Angeles"]);
        assert_eq!(graph.weight_of(0, 1), Some(2789));
    }

    #[test]
    fn last_distance_wins() {
        let graph = read("A: B(3)\nB: A(5)\n").unwrap();
        assert_eq!(graph.weight_of(0, 1), Some(5));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn malformed_entries() {
        for (data, needle) in [
            ("A: B", "Expected"),
            ("A: B(3", "Expected"),
            ("A: B 3)", "Expected"),
            ("A: (3)", "Missing neighbor"),
            ("A: B(x)", "Invalid distance"),
            ("A: B(-3)", "Invalid distance"),
            ("A: B(0)", "positive"),
            ("A: A(2)", "itself"),
            (": B(2)", "Missing city"),
        ] {
            let err = read(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{data}");
            assert!(err.to_string().contains(needle), "{data}: {err}");
        }
    }

    #[test]
    fn error_mentions_line() {
        let err = read("A: B(1)\n\nB: C(zz)\n").unwrap_err();
        assert!(err.to_string().starts_with("Line 3:"), "{err}");
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Springfield: Shelbyville(3)").unwrap();
        file.flush().unwrap();

        let graph = CityGraph::try_read_cities_file(file.path()).unwrap();
        assert_eq!(graph.node_of("Shelbyville"), Some(1));

        assert!(CityGraph::try_read_cities_file("/nonexistent/cities.txt").is_err());
    }
}
