use crate::graph::GraphDefinition;

/// Finds the probable merge point for a set of parallel sub-steps.
///
/// Each sub-step votes once per direct outgoing edge; the target with the
/// highest tally wins. The comparison is strict, so on a tie the first-seen
/// leader is kept. Only direct successors are considered; this is not a
/// reachability search. Returns `None` when no sub-step has outgoing edges.
pub fn find_convergence(graph: &GraphDefinition, sub_steps: &[String]) -> Option<String> {
    // Tally in discovery order so tie-breaks can never drift with map layout.
    let mut tallies: Vec<(&str, usize)> = Vec::new();
    for sub_step in sub_steps {
        for edge in graph.outgoing(sub_step) {
            match tallies.iter_mut().find(|(target, _)| *target == edge.target) {
                Some((_, count)) => *count += 1,
                None => tallies.push((edge.target.as_str(), 1)),
            }
        }
    }

    let mut max_count = 0;
    let mut merge_target = None;
    for (target, count) in &tallies {
        if *count > max_count {
            max_count = *count;
            merge_target = Some(*target);
        }
    }
    merge_target.map(str::to_string)
}
