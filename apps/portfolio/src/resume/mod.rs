// Résumé support: the PDF download endpoint and page rasterization for the clean viewer.

pub mod handlers;
pub mod rasterizer;

pub use rasterizer::{PageRasterizer, PdftoppmRasterizer, RasterPage};
