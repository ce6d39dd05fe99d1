/// Data layer: core types, loading, filtering and chart summaries.
///
/// Architecture:
/// ```text
///   assets/penguins.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset │  Vec<Observation>, read-only
///   └────────────────┘
///        │                     │
///        ▼                     ▼
///   ┌──────────┐         ┌──────────┐
///   │  filter   │         │ summary  │  histogram, species counts,
///   └──────────┘         └──────────┘  scatter series, row order
///   species set → filtered view
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod summary;
