use std::{
    sync::{
        Arc, Barrier,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use graphlib::{AdjacencyGraph, Graph, PathMethod, graph_test_support::check_path};

const NUM_THREADS: usize = 8;

#[cfg(not(feature = "slow_tests"))]
const VERTICES_PER_THREAD: usize = 200;
#[cfg(feature = "slow_tests")]
const VERTICES_PER_THREAD: usize = 20_000;

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdjacencyGraph<String>>();
}

#[test]
fn test_concurrent_add_vertex_registers_once() {
    let graph = Arc::new(AdjacencyGraph::new());
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let graph = graph.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                (0..VERTICES_PER_THREAD)
                    .filter(|v| graph.add_vertex(*v))
                    .count()
            })
        })
        .collect();
    let newly_added: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(newly_added, VERTICES_PER_THREAD);
    assert_eq!(graph.num_vertices(), VERTICES_PER_THREAD);
}

#[test]
fn test_concurrent_add_edge_loses_nothing() {
    let graph = Arc::new(AdjacencyGraph::new());
    for v in 0..VERTICES_PER_THREAD {
        graph.add_vertex(v);
    }
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let graph = graph.clone();
            thread::spawn(move || {
                for v in 1..VERTICES_PER_THREAD {
                    graph.add_edge(0, v).unwrap();
                    graph.add_bidirectional_edge(v - 1, v).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let expected = NUM_THREADS * (VERTICES_PER_THREAD - 1) * 3;
    assert_eq!(graph.num_edges(), expected);
    assert_eq!(
        graph.edges_from(&0).unwrap().len(),
        NUM_THREADS * (VERTICES_PER_THREAD - 1) + NUM_THREADS
    );
}

#[test]
fn test_queries_terminate_during_concurrent_growth() {
    let graph = Arc::new(AdjacencyGraph::new());
    graph.add_vertex(0usize);
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let graph = graph.clone();
        let done = done.clone();
        thread::spawn(move || {
            for v in 1..VERTICES_PER_THREAD * NUM_THREADS {
                graph.add_vertex(v);
                graph.add_edge(v - 1, v).unwrap();
                graph.add_edge(v, v / 2).unwrap();
            }
            done.store(true, Ordering::Release);
        })
    };

    let readers: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let graph = graph.clone();
            let done = done.clone();
            thread::spawn(move || {
                let mut found = 0;
                while !done.load(Ordering::Acquire) {
                    let end = (graph.num_vertices() * (i + 1)) / (NUM_THREADS + 1);
                    if let Some(path) = graph.get_path(&0, &end, PathMethod::Bfs).unwrap() {
                        check_path(&*graph, &path, &0, &end);
                        found += 1;
                    }
                    let _ = graph.bfs_order(end).count();
                }
                found
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let last = VERTICES_PER_THREAD * NUM_THREADS - 1;
    let path = graph.get_path(&0, &last, PathMethod::Bfs).unwrap().unwrap();
    assert_eq!(path.len(), last);
}
