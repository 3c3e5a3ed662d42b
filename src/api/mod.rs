pub mod convert;
pub mod status;

pub use convert::{
    __path_handle_hex_to_ral, __path_handle_hex_to_rgb, __path_handle_ral_to_hex,
    __path_handle_ral_to_name,
};
pub use convert::{
    handle_hex_to_ral, handle_hex_to_rgb, handle_ral_to_hex, handle_ral_to_name, HexQuery,
    HexToRalResponse, HexToRgbResponse, RalQuery, RalToHexResponse, RalToNameResponse,
};
pub use status::{__path_handle_status, handle_status};
