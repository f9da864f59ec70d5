pub mod command_list;
pub mod registers;

pub use command_list::{CommandList, CommandListError, Packet, Packets, Params, MAX_PACKET_PARAMS};
pub use lighting_hal::CommandStream;
