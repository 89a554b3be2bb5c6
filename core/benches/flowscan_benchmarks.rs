use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flowscan::{FlowEndNode, FlowNode, FlowStartNode, NodePredicate, StepDescriptor, StepNameMatcher, StepNode};

// --- Helper: Synthetic Run Graphs ---

/// A linear run of `steps` step nodes bracketed by the two sentinels.
/// Every tenth step invokes "echo"; the rest invoke "sh".
fn build_run(steps: usize) -> Vec<FlowNode> {
  let mut nodes = Vec::with_capacity(steps + 2);
  nodes.push(FlowNode::FlowStart(FlowStartNode::new("start")));
  for i in 0..steps {
    let descriptor_id = if i % 10 == 0 { "echo" } else { "sh" };
    nodes.push(FlowNode::Step(StepNode::new(
      format!("n{}", i),
      StepDescriptor::new(descriptor_id),
    )));
  }
  nodes.push(FlowNode::FlowEnd(FlowEndNode::new("end")));
  nodes
}

// --- Benchmark Functions ---

fn bench_matcher_single_node(c: &mut Criterion) {
  let matcher = StepNameMatcher::new("echo").unwrap();
  let hit = FlowNode::Step(StepNode::new("3", StepDescriptor::new("echo")));
  let miss = FlowNode::Step(StepNode::new("4", StepDescriptor::new("sh")));
  let sentinel = FlowNode::FlowStart(FlowStartNode::new("2"));

  let mut group = c.benchmark_group("matcher_single_node");
  group.bench_function("hit", |b| b.iter(|| matcher.matches(Some(&hit))));
  group.bench_function("miss", |b| b.iter(|| matcher.matches(Some(&miss))));
  group.bench_function("sentinel", |b| b.iter(|| matcher.matches(Some(&sentinel))));
  group.bench_function("absent", |b| b.iter(|| matcher.matches(None)));
  group.finish();
}

fn bench_matcher_over_run(c: &mut Criterion) {
  let matcher = StepNameMatcher::new("echo").unwrap();

  let mut group = c.benchmark_group("matcher_over_run");
  for steps in [10usize, 100, 1_000] {
    let run = build_run(steps);
    group.throughput(Throughput::Elements(run.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter(steps), &run, |b, run| {
      b.iter(|| run.iter().filter(|node| matcher.matches(Some(*node))).count())
    });
  }
  group.finish();
}

criterion_group!(benches, bench_matcher_single_node, bench_matcher_over_run);
criterion_main!(benches);
