pub mod config;
pub mod event_fetch;
pub mod events;
pub mod export;
pub mod figure;
pub mod font;
pub mod geometry;
pub mod http_cache;
pub mod http_client;
pub mod logging;
pub mod maps;
pub mod pitch;
pub mod raster;
pub mod shot_map;
pub mod style;
pub mod summary;
pub mod surface;
pub mod svg;
