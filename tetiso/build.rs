use std::collections::BTreeMap;
use std::fmt::Write;

/// Local corner pairs for the six edges of a tetrahedron
///
/// This must match `TET_EDGES` in `src/mesh/types.rs`
const TET_EDGES: [(usize, usize); 6] =
    [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    build_tet_table();
}

fn shares_corner(a: usize, b: usize) -> bool {
    let (a0, a1) = TET_EDGES[a];
    let (b0, b1) = TET_EDGES[b];
    a0 == b0 || a0 == b1 || a1 == b0 || a1 == b1
}

/// Builds a table mapping crossed-edge masks to ordered edge loops.
///
/// Every corner classification other than all-below or all-above crosses
/// either the 3 edges around an isolated corner, or 4 edges forming a quad.
/// Quad edges are ordered so that consecutive edges share a corner; opposite
/// edges of a tetrahedron are numbered `e` and `5 - e`.
fn build_tet_table() {
    let mut table: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for corners in 1u8..15 {
        let crossed: Vec<usize> = (0..6)
            .filter(|&e| {
                let (a, b) = TET_EDGES[e];
                ((corners >> a) & 1) != ((corners >> b) & 1)
            })
            .collect();
        let mask = crossed.iter().fold(0u8, |acc, e| acc | (1 << e));

        let edge_loop = match crossed.len() {
            3 => crossed.clone(),
            4 => {
                let first = crossed[0];
                let next = *crossed
                    .iter()
                    .find(|&&e| e != first && shares_corner(first, e))
                    .unwrap();
                assert!(crossed.contains(&(5 - first)));
                assert!(crossed.contains(&(5 - next)));
                vec![first, next, 5 - first, 5 - next]
            }
            n => panic!("corner mask {corners:04b} crosses {n} edges"),
        };
        for i in 0..edge_loop.len() {
            let j = (i + 1) % edge_loop.len();
            assert!(shares_corner(edge_loop[i], edge_loop[j]));
        }

        // Complementary corner masks cross the same edges
        if let Some(prev) = table.insert(mask, edge_loop.clone()) {
            assert_eq!(prev, edge_loop);
        }
    }

    let mut out = String::new();
    writeln!(
        &mut out,
        "/// Ordered loops of crossed edges, indexed by crossed-edge mask
///
/// Empty entries are masks which no corner classification can produce.
const EDGE_MASK_TO_LOOP: [&[LocalEdge]; 64] = ["
    )
    .unwrap();
    for mask in 0u8..64 {
        match table.get(&mask) {
            Some(edges) => {
                let edges = edges
                    .iter()
                    .map(|e| format!("LocalEdge::new({e})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(&mut out, "    &[{edges}],").unwrap();
            }
            None => writeln!(&mut out, "    &[],").unwrap(),
        }
    }
    writeln!(&mut out, "];").unwrap();

    let out_dir = std::env::var_os("OUT_DIR").unwrap();
    let dest_path = std::path::Path::new(&out_dir).join("tet_tables.rs");
    std::fs::write(dest_path, out).unwrap();
}
