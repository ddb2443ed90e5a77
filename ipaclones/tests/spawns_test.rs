//! Test suite for spawn resolution over the public API.

use ipaclones::CloneGraph;
use std::fmt::Write;

fn graph(lines: &[&str]) -> CloneGraph {
    CloneGraph::parse(&lines.join("\n"), "test.dump").expect("dump should parse")
}

#[test]
fn test_plain_inlining_spawn_is_not_a_clone() {
    let g = graph(&["Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;inlining to"]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.len(), 2);
    assert_eq!(spawns.get("f"), Some(&false));
    assert_eq!(spawns.get("g"), Some(&false));
}

#[test]
fn test_isra_spawn_is_a_clone() {
    let g = graph(&["Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra"]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.get("f"), Some(&false));
    assert_eq!(spawns.get("g"), Some(&true));
}

#[test]
fn test_duplicate_opt_clone_is_clone_positive_upstream() {
    // f(2) duplicates the constprop clone f(1) under the guise of inlining;
    // resolving the upstream name must flag "f" as optimized.
    let g = graph(&[
        "Callgraph clone;h;3;a.c;3;1;f;1;a.c;1;1;constprop",
        "Callgraph clone;f;1;a.c;1;1;f;2;a.c;1;1;inlining to",
    ]);
    let spawns = g.resolve_spawns("h").expect("h is known");
    assert_eq!(spawns.get("h"), Some(&false));
    assert_eq!(spawns.get("f"), Some(&true));
}

#[test]
fn test_clone_flag_is_or_over_instances() {
    // g(2) arrives via plain inlining, g(5) via isra: one optimized
    // instance is enough to flag the name.
    let g = graph(&[
        "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;inlining to",
        "Callgraph clone;f;1;a.c;1;1;g;5;a.c;2;1;isra",
    ]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.get("f"), Some(&false));
    assert_eq!(spawns.get("g"), Some(&true));
}

#[test]
fn test_all_instances_of_name_are_roots() {
    // Two unrelated nodes named f; both must seed the traversal.
    let g = graph(&[
        "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;inlining to",
        "Callgraph clone;f;7;b.c;1;1;h;8;b.c;2;1;isra",
    ]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.get("g"), Some(&false));
    assert_eq!(spawns.get("h"), Some(&true));
}

#[test]
fn test_removed_opt_clone_is_traversed_but_not_recorded() {
    // g(2) is a removed isra clone sitting between f and k: the traversal
    // must pass through it without recording it.
    let g = graph(&[
        "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra",
        "Callgraph clone;g;2;a.c;2;1;k;3;a.c;3;1;inlining to",
        "Callgraph removal;g;2;a.c;2;1",
    ]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.len(), 2);
    assert_eq!(spawns.get("f"), Some(&false));
    assert_eq!(spawns.get("k"), Some(&false));
    assert_eq!(spawns.get("g"), None);
}

#[test]
fn test_removed_plain_node_is_still_recorded() {
    // Removal alone does not suppress a node; only removed opt clones are
    // skipped.
    let g = graph(&[
        "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;inlining to",
        "Callgraph removal;g;2;a.c;2;1",
    ]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.get("g"), Some(&false));
}

#[test]
fn test_cycle_with_exit_surfaces_whole_component() {
    let g = graph(&[
        "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra",
        "Callgraph clone;g;2;a.c;2;1;f;1;a.c;1;1;isra",
        "Callgraph clone;g;2;a.c;2;1;k;5;a.c;5;1;inlining to",
    ]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.len(), 3);
    assert_eq!(spawns.get("f"), Some(&true));
    assert_eq!(spawns.get("g"), Some(&true));
    assert_eq!(spawns.get("k"), Some(&false));
}

#[test]
fn test_fully_removed_dead_end_cycle_yields_nothing() {
    // Both members removed, no edge ever leaves the cycle: nothing
    // survives, and the query must still terminate.
    let g = graph(&[
        "Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;isra",
        "Callgraph clone;g;2;a.c;2;1;f;1;a.c;1;1;isra",
        "Callgraph removal;f;1;a.c;1;1",
        "Callgraph removal;g;2;a.c;2;1",
    ]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert!(spawns.is_empty());
}

#[test]
fn test_self_loop_terminates() {
    let g = graph(&["Callgraph clone;f;1;a.c;1;1;f;1;a.c;1;1;inlining to"]);
    let spawns = g.resolve_spawns("f").expect("f is known");
    assert_eq!(spawns.len(), 1);
    assert_eq!(spawns.get("f"), Some(&false));
}

#[test]
fn test_unknown_name_is_none() {
    let g = graph(&["Callgraph clone;f;1;a.c;1;1;g;2;a.c;2;1;inlining to"]);
    assert!(g.resolve_spawns("nonexistent").is_none());
}

#[test]
fn test_long_chain_resolves_iteratively() {
    // Deep chains appear in real dumps; the traversal and the SCC pass
    // must not recurse.
    let mut dump = String::new();
    for i in 0..5000_u32 {
        writeln!(
            dump,
            "Callgraph clone;f{};{};a.c;1;1;f{};{};a.c;1;1;inlining to",
            i,
            i,
            i + 1,
            i + 1
        )
        .expect("write to string");
    }
    let g = CloneGraph::parse(&dump, "chain.dump").expect("dump should parse");
    let spawns = g.resolve_spawns("f0").expect("f0 is known");
    assert_eq!(spawns.len(), 5001);
    assert!(spawns.values().all(|&optimized| !optimized));
}
