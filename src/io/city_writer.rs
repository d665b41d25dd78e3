use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::graph::*;

/// Writes a road network in the line format understood by [`super::GraphCityReader`].
/// Every city gets its own line, in id order, listing only the roads to cities with smaller
/// ids. Hence every road appears once and no city is named before its own line, so reading
/// the output back assigns the same ids.
pub trait CityWriter {
    fn try_write_cities<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_cities_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl CityWriter for CityGraph {
    fn try_write_cities<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for u in self.vertices() {
            let mut roads: Vec<_> = self
                .weighted_neighbors_of(u)
                .filter(|&(v, _)| v < u)
                .collect();
            roads.sort_unstable();

            write!(writer, "{}:", self.name_of(u))?;
            for (i, (v, w)) in roads.into_iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(writer, "{sep}{}({w})", self.name_of(v))?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn try_write_cities_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_cities(writer)
    }
}
