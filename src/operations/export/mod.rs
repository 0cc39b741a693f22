mod encode_svg;

pub use encode_svg::EncodeSvg;
