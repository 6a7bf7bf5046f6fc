use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: u64,
    /// Number of nodes created in the search space
    generated_nodes: u64,
    /// Number of candidate successors dropped as closed or duplicate
    suppressed_nodes: u64,
    /// Number of positions whose best known cost improved after first sighting
    relaxed_nodes: u64,
    /// Time when the search started
    search_start_time: std::time::Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: std::time::Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            suppressed_nodes: 0,
            relaxed_nodes: 0,
            search_start_time: std::time::Instant::now(),
            last_log_time: std::time::Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_suppressed_nodes(&mut self) {
        self.suppressed_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_relaxed_nodes(&mut self) {
        self.relaxed_nodes += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn suppressed_nodes(&self) -> u64 {
        self.suppressed_nodes
    }

    pub fn relaxed_nodes(&self) -> u64 {
        self.relaxed_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = std::time::Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            suppressed_nodes = self.suppressed_nodes,
            relaxed_nodes = self.relaxed_nodes
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
