pub mod network;

pub use network::{Line, Network, NetworkError, Station};

pub mod section;

pub use section::Section;

pub mod chain;

pub use chain::LineSections;

pub mod fare;

pub use fare::{AgeDiscountPolicy, Fare, FareError, FarePolicy};

pub mod dijkstra;

pub use dijkstra::dijkstra_query;

pub mod path;

pub use path::{
    create_path, create_path_from_chains, create_path_with_policy, find_path, Path, PathError, PathRequest, QueryError,
};

pub mod utils;
