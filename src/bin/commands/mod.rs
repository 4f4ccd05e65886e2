pub mod artist;
pub mod catalog;
pub mod config;
pub mod user;
pub mod utils;

use clap::{Args, Subcommand};
use lastfm_api::{LastFmClient, Period};

/// Paging options shared by every paged listing
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Subcommand)]
pub enum ArtistCommands {
    /// Show an artist's profile, stats, tags and biography
    Info {
        /// Artist name
        #[arg(required_unless_present = "mbid")]
        artist: Option<String>,

        /// Look the artist up by MusicBrainz id instead
        #[arg(long)]
        mbid: Option<String>,

        /// Include this user's playcount
        #[arg(long)]
        username: Option<String>,

        /// Biography language (ISO 639 alpha-2)
        #[arg(long)]
        lang: Option<String>,
    },

    /// List similar artists
    Similar {
        artist: String,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// List an artist's top tracks
    TopTracks {
        artist: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// List an artist's top albums
    TopAlbums {
        artist: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Search artists by name
    Search {
        query: String,

        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand)]
pub enum AlbumCommands {
    /// Show an album with its tracklist
    ///
    /// Usage examples:
    /// # By name
    /// lastfm-api album info "Radiohead" "OK Computer"
    ///
    /// # By MusicBrainz id, with a user's playcount
    /// lastfm-api album info --mbid 0b6b4ba0-d36f-47bd-b4ea-6a5b91842d29 --username rj
    Info {
        #[arg(required_unless_present = "mbid")]
        artist: Option<String>,

        #[arg(required_unless_present = "mbid")]
        album: Option<String>,

        #[arg(long)]
        mbid: Option<String>,

        #[arg(long)]
        username: Option<String>,
    },

    /// Search albums by title
    Search {
        query: String,

        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand)]
pub enum TrackCommands {
    /// Show a track's details
    Info {
        #[arg(required_unless_present = "mbid")]
        artist: Option<String>,

        #[arg(required_unless_present = "mbid")]
        track: Option<String>,

        #[arg(long)]
        mbid: Option<String>,

        #[arg(long)]
        username: Option<String>,
    },

    /// Search tracks by title
    Search {
        query: String,

        /// Only match tracks by this artist
        #[arg(long)]
        artist: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand)]
pub enum GeoCommands {
    /// Most popular tracks in a country
    TopTracks {
        country: String,

        /// Metro area within the country
        #[arg(long)]
        location: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Most popular artists in a country
    TopArtists {
        country: String,

        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    TopTracks {
        tag: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    TopArtists {
        tag: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    TopAlbums {
        tag: String,

        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Show a user's profile
    Info { user: String },

    /// Show the profile of the user owning a session key
    Session {
        /// Session key
        sk: String,
    },

    /// List recent scrobbles
    ///
    /// Usage examples:
    /// # First page
    /// lastfm-api user recent rj
    ///
    /// # Walk pages until 500 scrobbles are collected
    /// lastfm-api user recent rj --all --max 500
    Recent {
        user: String,

        /// Include artist images and loved flags
        #[arg(long)]
        extended: bool,

        /// Follow pagination instead of printing one page
        #[arg(long, conflicts_with = "extended")]
        all: bool,

        /// Maximum number of scrobbles collected with --all
        #[arg(long, default_value = "200")]
        max: usize,

        /// Only scrobbles after this UNIX timestamp
        #[arg(long)]
        from: Option<u64>,

        /// Only scrobbles before this UNIX timestamp
        #[arg(long)]
        to: Option<u64>,

        #[command(flatten)]
        paging: PageArgs,
    },

    TopTracks {
        user: String,

        /// overall, 7day, 1month, 3month, 6month or 12month
        #[arg(long)]
        period: Option<Period>,

        #[command(flatten)]
        paging: PageArgs,
    },

    TopArtists {
        user: String,

        #[arg(long)]
        period: Option<Period>,

        #[command(flatten)]
        paging: PageArgs,
    },

    TopAlbums {
        user: String,

        #[arg(long)]
        period: Option<Period>,

        #[command(flatten)]
        paging: PageArgs,
    },

    Loved {
        user: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    Friends {
        user: String,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Weekly track chart (latest week unless --from/--to are given)
    WeeklyTracks {
        user: String,

        #[arg(long, requires = "to")]
        from: Option<u64>,

        #[arg(long, requires = "from")]
        to: Option<u64>,
    },

    WeeklyArtists {
        user: String,

        #[arg(long, requires = "to")]
        from: Option<u64>,

        #[arg(long, requires = "from")]
        to: Option<u64>,
    },

    WeeklyAlbums {
        user: String,

        #[arg(long, requires = "to")]
        from: Option<u64>,

        #[arg(long, requires = "from")]
        to: Option<u64>,
    },

    /// Week boundaries available for the weekly charts
    WeeklyChartList { user: String },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Save an API key to the config file
    Init {
        #[arg(long)]
        api_key: String,

        #[arg(long)]
        api_secret: Option<String>,
    },

    /// Print the config file location and settings (secrets redacted)
    Show,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Artist lookups
    Artist {
        #[command(subcommand)]
        command: ArtistCommands,
    },

    /// Album lookups
    Album {
        #[command(subcommand)]
        command: AlbumCommands,
    },

    /// Track lookups
    Track {
        #[command(subcommand)]
        command: TrackCommands,
    },

    /// Country charts
    Geo {
        #[command(subcommand)]
        command: GeoCommands,
    },

    /// Tag charts
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// User profiles, scrobbles and charts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage the saved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Execute the given command with the provided client
pub async fn execute_command(
    command: Commands,
    client: &LastFmClient,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Artist { command } => artist::handle_artist(client, command, compact).await,
        Commands::Album { command } => catalog::handle_album(client, command, compact).await,
        Commands::Track { command } => catalog::handle_track(client, command, compact).await,
        Commands::Geo { command } => catalog::handle_geo(client, command, compact).await,
        Commands::Tag { command } => catalog::handle_tag(client, command, compact).await,
        Commands::User { command } => user::handle_user(client, command, compact).await,
        Commands::Config { command } => config::handle_config(&command),
    }
}
