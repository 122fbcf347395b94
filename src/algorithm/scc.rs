//! Strongly connected components of a directed graph.
//!
//! #   Algorithm
//!
//! Tarjan's algorithm, in O(V + E), with an explicit stack of frames rather than recursion, so that the depth of the
//! graph is not limited by the depth of the call stack.

/// Returns the strongly connected components of a directed graph.
///
/// The graph is given as an adjacency list: `successors[u]` lists the nodes `v` for which there is an edge `u -> v`.
/// Each node appears in exactly one component; components are returned in reverse topological order.
///
/// #   Panics
///
/// If a successor is not a valid node, that is, not less than `successors.len()`.
///
/// ```
/// use integer_set::algorithm::strongly_connected_components;
///
/// //  0 <-> 1 -> 2
/// let components = strongly_connected_components(&[vec![1], vec![0, 2], vec![]]);
///
/// assert_eq!(vec![vec![2], vec![1, 0]], components);
/// ```
pub fn strongly_connected_components(successors: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut tarjan = Tarjan::new(successors.len());

    for root in 0..successors.len() {
        if tarjan.is_visited(root) {
            continue;
        }

        tarjan.run(successors, root);
    }

    tarjan.components
}

//
//  Implementation details
//

const UNVISITED: usize = usize::MAX;

struct Tarjan {
    //  Discovery index of each node, or `UNVISITED`.
    index: Vec<usize>,
    //  Smallest discovery index reachable from each node, through nodes still on the stack.
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: usize,
    components: Vec<Vec<usize>>,
}

impl Tarjan {
    fn new(nodes: usize) -> Self {
        Self {
            index: vec![UNVISITED; nodes],
            low: vec![0; nodes],
            on_stack: vec![false; nodes],
            stack: Vec::new(),
            next_index: 0,
            components: Vec::new(),
        }
    }

    fn is_visited(&self, node: usize) -> bool {
        self.index[node] != UNVISITED
    }

    fn visit(&mut self, node: usize) {
        self.index[node] = self.next_index;
        self.low[node] = self.next_index;
        self.next_index += 1;

        self.stack.push(node);
        self.on_stack[node] = true;
    }

    //  Explores all nodes reachable from `root`, which must not be visited yet.
    fn run(&mut self, successors: &[Vec<usize>], root: usize) {
        //  Each frame is a node, and the position of its next successor to explore.
        let mut frames = vec![(root, 0)];

        self.visit(root);

        while let Some(frame) = frames.last_mut() {
            let node = frame.0;

            if let Some(&successor) = successors[node].get(frame.1) {
                frame.1 += 1;

                if !self.is_visited(successor) {
                    self.visit(successor);
                    frames.push((successor, 0));
                } else if self.on_stack[successor] {
                    self.low[node] = self.low[node].min(self.index[successor]);
                }

                continue;
            }

            frames.pop();

            if let Some(&(parent, _)) = frames.last() {
                self.low[parent] = self.low[parent].min(self.low[node]);
            }

            if self.low[node] == self.index[node] {
                self.pop_component(node);
            }
        }
    }

    //  Pops the nodes of the component rooted at `root` from the stack.
    fn pop_component(&mut self, root: usize) {
        let mut component = Vec::new();

        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            component.push(member);

            if member == root {
                break;
            }
        }

        self.components.push(component);
    }
}

#[cfg(test)]
mod scc_tests {
    use super::*;

    fn sorted(mut components: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        for component in &mut components {
            component.sort();
        }

        components.sort();

        components
    }

    #[test]
    fn empty() {
        assert!(strongly_connected_components(&[]).is_empty());
    }

    #[test]
    fn isolated() {
        let components = strongly_connected_components(&[vec![], vec![], vec![]]);

        assert_eq!(vec![vec![0], vec![1], vec![2]], sorted(components));
    }

    #[test]
    fn self_loop() {
        let components = strongly_connected_components(&[vec![0], vec![0]]);

        assert_eq!(vec![vec![0], vec![1]], sorted(components));
    }

    #[test]
    fn cycles() {
        //  0 -> 1 -> 2 -> 0, 2 -> 3, 3 <-> 4, 5 -> 4.
        let successors = [vec![1], vec![2], vec![0, 3], vec![4], vec![3], vec![4]];

        let components = strongly_connected_components(&successors);

        assert_eq!(vec![vec![0, 1, 2], vec![3, 4], vec![5]], sorted(components.clone()));

        //  Reverse topological order: {3, 4} is a sink, hence first.
        let mut sink = components[0].clone();
        sink.sort();

        assert_eq!(vec![3, 4], sink);
    }

    #[test]
    fn deep_chain() {
        const NODES: usize = 100_000;

        let successors: Vec<Vec<usize>> = (0..NODES).map(|node| vec![(node + 1) % NODES]).collect();

        let components = strongly_connected_components(&successors);

        assert_eq!(1, components.len());
        assert_eq!(NODES, components[0].len());
    }
} // mod scc_tests
