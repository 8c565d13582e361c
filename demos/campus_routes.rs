//! Walks a small campus corridor map through the whole public surface:
//! construction, the two breadth-first variants, depth-first descent,
//! subgraph extraction and forest pruning.
//!
//! Run with `cargo run --example campus_routes`.

use anyhow::Result;

use arbor::DiGraph;

fn main() -> Result<()> {
    let mut campus = DiGraph::new();

    for room in [
        "entrance", "lobby", "library", "lab", "archive", "cafeteria", "annex", "storage",
    ] {
        campus.add_vertex(room);
    }

    // Corridors are one-way; weights are meters.
    campus.add_edge(&"entrance", &"lobby", 12)?;
    campus.add_edge(&"lobby", &"library", 30)?;
    campus.add_edge(&"lobby", &"cafeteria", 18)?;
    campus.add_edge(&"library", &"lab", 9)?;
    campus.add_edge(&"library", &"archive", 21)?;
    campus.add_edge(&"cafeteria", &"lab", 25)?;
    // A disconnected maintenance wing.
    campus.add_edge(&"annex", &"storage", 7)?;

    println!("campus map:\n{campus}");

    let sweep = campus.bfs(&"entrance")?;
    let rooms: Vec<_> = sweep.into_iter().map(|room| campus[room]).collect();
    println!("reachable from the entrance (breadth order): {rooms:?}");

    let hops = campus.bfs_distances(&"entrance")?;
    println!("doors to pass from the entrance:");
    for (room, count) in hops.iter() {
        println!("  {:<10} {count}", campus[room]);
    }

    let descent = campus.dfs(&"entrance")?;
    let rooms: Vec<_> = descent.into_iter().map(|room| campus[room]).collect();
    println!("depth-first walk: {rooms:?}");

    let closing_order: Vec<_> = campus.dfs_iter(&"entrance").payloads().copied().collect();
    println!("rooms in closing (finish) order: {closing_order:?}");

    if let Some(wing) = campus.subgraph(&"annex") {
        println!("maintenance wing on its own:\n{wing}");
    }

    let evacuation_tree = campus.dfs_forest();
    println!(
        "single-parent evacuation plan ({} corridors kept of {}):\n{evacuation_tree}",
        evacuation_tree.edge_count(),
        campus.edge_count(),
    );

    Ok(())
}
