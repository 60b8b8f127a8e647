//! Density-based spatial outlier removal for LiDAR point collections.
//!
//! Groups points into density-connected clusters and keeps only clusters
//! of plausible size for a single object silhouette. Noise speckle forms
//! clusters that are too small; merged background returns form clusters
//! that are too large.

use kiddo::{KdTree, SquaredEuclidean};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::types::LidarPoint;

/// Configuration for Euclidean cluster extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuclideanClusterConfig {
    /// Neighbor reachability distance in meters.
    ///
    /// Two points belong to the same cluster when connected through a
    /// chain of neighbors each within this distance.
    /// Default: 0.05m
    pub tolerance: f32,

    /// Smallest cluster kept, in points.
    ///
    /// Default: 30
    pub min_cluster_size: usize,

    /// Largest cluster kept, in points.
    ///
    /// Default: 25000
    pub max_cluster_size: usize,
}

impl Default for EuclideanClusterConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.05,
            min_cluster_size: 30,
            max_cluster_size: 25000,
        }
    }
}

/// Euclidean clustering filter over 3D points.
///
/// Uses a k-d tree for the neighbor queries that grow each cluster.
/// Cluster boundaries are not retained: the output is the flattened
/// collection of points whose cluster met the size bounds. Empty output
/// means "no valid range data", never a distance of zero.
#[derive(Debug, Clone)]
pub struct EuclideanClusterFilter {
    config: EuclideanClusterConfig,
}

impl EuclideanClusterFilter {
    /// Create a new filter with the given configuration.
    pub fn new(config: EuclideanClusterConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &EuclideanClusterConfig {
        &self.config
    }

    /// Apply clustering and return the surviving points.
    pub fn apply(&self, points: &[LidarPoint]) -> Vec<LidarPoint> {
        if points.is_empty() {
            return Vec::new();
        }

        let mut tree: KdTree<f32, 3> = KdTree::new();
        for (i, point) in points.iter().enumerate() {
            tree.add(&[point.x, point.y, point.z], i as u64);
        }

        let tolerance_sq = self.config.tolerance * self.config.tolerance;
        let mut visited = vec![false; points.len()];
        let mut surviving = Vec::new();
        let mut kept_clusters = 0usize;
        let mut dropped_clusters = 0usize;

        for seed in 0..points.len() {
            if visited[seed] {
                continue;
            }
            visited[seed] = true;

            // Grow the cluster by radius expansion from each frontier point
            let mut cluster = vec![seed];
            let mut frontier = vec![seed];
            while let Some(index) = frontier.pop() {
                let point = &points[index];
                for neighbor in
                    tree.within_unsorted::<SquaredEuclidean>(&[point.x, point.y, point.z], tolerance_sq)
                {
                    let neighbor_index = neighbor.item as usize;
                    if !visited[neighbor_index] {
                        visited[neighbor_index] = true;
                        cluster.push(neighbor_index);
                        frontier.push(neighbor_index);
                    }
                }
            }

            if cluster.len() >= self.config.min_cluster_size
                && cluster.len() <= self.config.max_cluster_size
            {
                surviving.extend(cluster.iter().map(|&i| points[i]));
                kept_clusters += 1;
            } else {
                dropped_clusters += 1;
            }
        }

        debug!(
            "clustering kept {}/{} points ({} clusters kept, {} dropped)",
            surviving.len(),
            points.len(),
            kept_clusters,
            dropped_clusters
        );

        surviving
    }
}

impl Default for EuclideanClusterFilter {
    fn default() -> Self {
        Self::new(EuclideanClusterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dense line of points along X, spaced well under `spacing`.
    fn create_blob(n: usize, start_x: f32, spacing: f32) -> Vec<LidarPoint> {
        (0..n)
            .map(|i| LidarPoint::new(start_x + i as f32 * spacing, 0.0, 0.0))
            .collect()
    }

    fn test_config() -> EuclideanClusterConfig {
        EuclideanClusterConfig {
            tolerance: 0.1,
            min_cluster_size: 5,
            max_cluster_size: 1000,
        }
    }

    #[test]
    fn test_empty_input() {
        let filter = EuclideanClusterFilter::default();
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn test_single_dense_cluster_survives() {
        let filter = EuclideanClusterFilter::new(test_config());
        let points = create_blob(20, 10.0, 0.05);

        let result = filter.apply(&points);

        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_small_cluster_discarded_as_noise() {
        let filter = EuclideanClusterFilter::new(test_config());
        let points = create_blob(3, 10.0, 0.05);

        let result = filter.apply(&points);

        assert!(result.is_empty());
    }

    #[test]
    fn test_oversized_cluster_discarded() {
        let config = EuclideanClusterConfig {
            tolerance: 0.1,
            min_cluster_size: 1,
            max_cluster_size: 10,
        };
        let filter = EuclideanClusterFilter::new(config);
        let points = create_blob(50, 10.0, 0.05);

        let result = filter.apply(&points);

        assert!(result.is_empty());
    }

    #[test]
    fn test_isolated_outlier_removed_with_cluster_kept() {
        let filter = EuclideanClusterFilter::new(test_config());
        let mut points = create_blob(20, 10.0, 0.05);
        // Far off the object, unreachable within tolerance
        points.push(LidarPoint::new(25.0, 3.0, 0.0));

        let result = filter.apply(&points);

        assert_eq!(result.len(), 20);
        assert!(result.iter().all(|p| p.x < 20.0));
    }

    #[test]
    fn test_two_separate_clusters_both_kept() {
        let filter = EuclideanClusterFilter::new(test_config());
        let mut points = create_blob(10, 10.0, 0.05);
        points.extend(create_blob(10, 14.0, 0.05));

        let result = filter.apply(&points);

        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_chain_connectivity_bridges_points() {
        // Points spaced just inside tolerance form one chain-connected cluster
        let config = EuclideanClusterConfig {
            tolerance: 0.1,
            min_cluster_size: 10,
            max_cluster_size: 1000,
        };
        let filter = EuclideanClusterFilter::new(config);
        let points = create_blob(10, 5.0, 0.09);

        let result = filter.apply(&points);

        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_no_cluster_meets_bounds_yields_empty() {
        let config = EuclideanClusterConfig {
            tolerance: 0.1,
            min_cluster_size: 100,
            max_cluster_size: 1000,
        };
        let filter = EuclideanClusterFilter::new(config);
        let points = create_blob(50, 10.0, 0.05);

        assert!(filter.apply(&points).is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = EuclideanClusterConfig::default();
        assert_eq!(config.tolerance, 0.05);
        assert_eq!(config.min_cluster_size, 30);
        assert_eq!(config.max_cluster_size, 25000);
    }
}
