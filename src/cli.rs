use {
	clap::Parser,
	std::{
		net::{IpAddr, Ipv4Addr, SocketAddr},
		path::PathBuf,
	},
};

pub(crate) fn args() -> Args
{
	Args::parse()
}

/// Serves a JSON album catalogue backed by an Airtable table.
///
/// Airtable credentials are read from the `AIRTABLE_TOKEN`, `AIRTABLE_BASE_ID`
/// and `AIRTABLE_TABLE` environment variables, which may also be set in a
/// `.env` file.
#[derive(Debug, Parser)]
#[command(version)]
pub(crate) struct Args
{
	/// Load environment variables from this file instead of `./.env`
	#[arg(long, value_name = "FILE")]
	pub env_file: Option<PathBuf>,

	/// The IP address the server should listen on
	#[arg(long = "ip", env = "ALBUM_API_IP", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
	pub ip_addr: IpAddr,

	/// The port the server should listen on
	#[arg(long, env = "ALBUM_API_PORT", default_value_t = 8080)]
	pub port: u16,

	/// Disable colors in log output
	#[arg(long)]
	pub no_color: bool,
}

impl Args
{
	pub(crate) fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip_addr, self.port)
	}
}
