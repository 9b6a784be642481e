//! Encounter sheets exported as CSV.
//!
//! Each sheet is a row of route headers followed by columns of cells, split
//! on `,,`. Within a column, area headers and method markers start a new
//! group; every other non-blank cell is a species display name.

use dex_engine::locations::{AreaTable, RouteTable};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static FLOOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]F").unwrap());

const CELL_SEPARATOR: &str = ",,";
const LAND: &str = "land";
const SURF: &str = "surf";
/// Rows above the route headers in the water sheet.
pub const WATER_HEADER_SKIP: usize = 2;

/// Route header -> raw cells in that column, top to bottom.
pub type Columns = IndexMap<String, Vec<String>>;

/// Split a sheet into columns under its header row.
pub fn parse_columns(text: &str, skip_lines: usize) -> Columns {
    let mut lines = text.lines().skip(skip_lines);
    let Some(header) = lines.next() else {
        return Columns::new();
    };
    let headers: Vec<String> = header.split(CELL_SEPARATOR).map(|h| h.trim().to_string()).collect();
    let mut columns: Columns = headers.iter().map(|h| (h.clone(), Vec::new())).collect();

    for line in lines {
        for (header, cell) in headers.iter().zip(line.split(CELL_SEPARATOR)) {
            if let Some(column) = columns.get_mut(header) {
                column.push(cell.to_string());
            }
        }
    }
    columns
}

/// Whether a cell names an area within a route rather than a species.
pub fn is_area_header(cell: &str) -> bool {
    matches!(
        cell,
        "Inside" | "Outside" | "Shadow Basement" | "Swarm" | "Special Encounter" | "Easy" | "Medium" | "Hard" | "Insane"
    ) || cell.contains("Area")
        || cell.contains("Flowers")
        || cell.contains(", ")
        || cell.contains("Headbutt")
        || FLOOR_RE.is_match(cell)
}

fn is_method_marker(cell: &str) -> bool {
    cell.contains("Rod") || cell == "Fishing" || cell == "Rock Smash"
}

/// Collects one column into method -> area -> names.
struct ColumnBuilder {
    methods: IndexMap<String, AreaTable>,
    method: String,
    area: String,
    names: Vec<String>,
}

impl ColumnBuilder {
    fn new(method: &str) -> Self {
        Self {
            methods: IndexMap::new(),
            method: method.to_string(),
            area: String::new(),
            names: Vec::new(),
        }
    }

    fn flush(&mut self) {
        let names = std::mem::take(&mut self.names);
        if names.is_empty() {
            return;
        }
        self.methods
            .entry(self.method.clone())
            .or_default()
            .entry(self.area.clone())
            .or_default()
            .extend(names);
    }

    fn start_area(&mut self, area: &str) {
        self.flush();
        self.area = area.to_string();
    }

    fn start_method(&mut self, method: &str) {
        self.flush();
        self.method = method.to_string();
        self.area.clear();
    }

    fn finish(mut self) -> IndexMap<String, AreaTable> {
        self.flush();
        self.methods
    }
}

/// Grass & cave sheet: every column is the `land` method.
pub fn land_routes(columns: &Columns) -> RouteTable {
    columns
        .iter()
        .map(|(route, cells)| {
            let mut builder = ColumnBuilder::new(LAND);
            for cell in cells.iter().map(|c| c.trim()) {
                if is_area_header(cell) {
                    builder.start_area(cell);
                } else if !cell.is_empty() {
                    builder.names.push(cell.to_string());
                }
            }
            (route.clone(), builder.finish())
        })
        .collect()
}

/// Surfing/fishing/rock smash sheet.
///
/// Columns start as `surf`; `* Rod`, `Fishing` and `Rock Smash` cells switch
/// the method. `X` cells mark empty slots.
pub fn water_routes(columns: &Columns) -> RouteTable {
    columns
        .iter()
        .map(|(route, cells)| {
            let mut builder = ColumnBuilder::new(SURF);
            for cell in cells.iter().map(|c| c.trim()) {
                if is_area_header(cell) {
                    builder.start_area(cell);
                } else if is_method_marker(cell) {
                    builder.start_method(cell);
                } else if !cell.is_empty() && cell != "X" {
                    builder.names.push(cell.to_string());
                }
            }
            (route.clone(), builder.finish())
        })
        .collect()
}

/// Fold `water` into `land`. A method present in both for the same route is
/// taken from `water`.
pub fn merge_routes(mut land: RouteTable, water: RouteTable) -> RouteTable {
    for (route, methods) in water {
        let target = land.entry(route).or_default();
        for (method, areas) in methods {
            target.insert(method, areas);
        }
    }
    land
}

/// Parse both sheets and merge them into one route table.
pub fn parse_encounters(land_csv: &str, water_csv: &str) -> RouteTable {
    let land = land_routes(&parse_columns(land_csv, 0));
    let water = water_routes(&parse_columns(water_csv, WATER_HEADER_SKIP));
    let routes = merge_routes(land, water);
    tracing::debug!("parsed encounters for {} routes", routes.len());
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND_SHEET: &str = "\
Route 1,,Route 2
Pidgey,,Caterpie
Rattata,,Inside
Swarm,,Metapod
Nidoran♀,,
";

    const WATER_SHEET: &str = "\
Surfing/Fishing sheet
(updated)
Route 1,,Route 3
Tentacool,,Magikarp
Old Rod,,X
Magikarp,,
Super Rod,,
Gyarados,,
";

    #[test]
    fn test_area_headers() {
        assert!(is_area_header("Inside"));
        assert!(is_area_header("B2F"));
        assert!(is_area_header("Area 1"));
        assert!(is_area_header("Easy"));
        assert!(!is_area_header("Pidgey"));
        assert!(!is_area_header("Floette"));
    }

    #[test]
    fn test_land_columns() {
        let routes = land_routes(&parse_columns(LAND_SHEET, 0));
        let route1 = &routes["Route 1"]["land"];
        assert_eq!(route1[""], vec!["Pidgey", "Rattata"]);
        assert_eq!(route1["Swarm"], vec!["Nidoran♀"]);
        assert_eq!(routes["Route 2"]["land"]["Inside"], vec!["Metapod"]);
    }

    #[test]
    fn test_water_methods() {
        let routes = water_routes(&parse_columns(WATER_SHEET, WATER_HEADER_SKIP));
        let route1 = &routes["Route 1"];
        assert_eq!(route1["surf"][""], vec!["Tentacool"]);
        assert_eq!(route1["Old Rod"][""], vec!["Magikarp"]);
        assert_eq!(route1["Super Rod"][""], vec!["Gyarados"]);
        assert!(!routes["Route 3"].contains_key("Old Rod"));
    }

    #[test]
    fn test_sheets_merge_per_route() {
        let routes = parse_encounters(LAND_SHEET, WATER_SHEET);
        assert_eq!(routes.len(), 3);
        let methods: Vec<&String> = routes["Route 1"].keys().collect();
        assert_eq!(methods, vec!["land", "surf", "Old Rod", "Super Rod"]);
        assert!(routes["Route 3"].contains_key("surf"));
    }
}
