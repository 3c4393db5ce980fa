pub mod color_route;
