use super::utils::print_json;
use super::{AlbumCommands, GeoCommands, PageArgs, TagCommands, TrackCommands};
use lastfm_api::{
    AlbumInfoParams, GeoParams, LastFmClient, SearchParams, TagParams, TrackInfoParams,
};

fn search_params(query: String, paging: PageArgs) -> SearchParams {
    SearchParams {
        page: paging.page,
        limit: paging.limit,
        ..SearchParams::new(query)
    }
}

fn tag_params(tag: String, paging: PageArgs) -> TagParams {
    TagParams {
        page: paging.page,
        limit: paging.limit,
        ..TagParams::new(tag)
    }
}

fn geo_params(country: String, paging: PageArgs) -> GeoParams {
    GeoParams {
        page: paging.page,
        limit: paging.limit,
        ..GeoParams::new(country)
    }
}

pub async fn handle_album(
    client: &LastFmClient,
    command: AlbumCommands,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        AlbumCommands::Info {
            artist,
            album,
            mbid,
            username,
        } => {
            let params = AlbumInfoParams {
                artist,
                album,
                mbid,
                username,
                ..Default::default()
            };
            print_json(&client.album_info(&params).await?, compact)
        }
        AlbumCommands::Search { query, paging } => {
            let results = client.album_search(&search_params(query, paging)).await?;
            print_json(&results, compact)
        }
    }
}

pub async fn handle_track(
    client: &LastFmClient,
    command: TrackCommands,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TrackCommands::Info {
            artist,
            track,
            mbid,
            username,
        } => {
            let params = TrackInfoParams {
                artist,
                track,
                mbid,
                username,
                ..Default::default()
            };
            print_json(&client.track_info(&params).await?, compact)
        }
        TrackCommands::Search {
            query,
            artist,
            paging,
        } => {
            let params = SearchParams {
                artist,
                ..search_params(query, paging)
            };
            print_json(&client.track_search(&params).await?, compact)
        }
    }
}

pub async fn handle_geo(
    client: &LastFmClient,
    command: GeoCommands,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        GeoCommands::TopTracks {
            country,
            location,
            paging,
        } => {
            let params = GeoParams {
                location,
                ..geo_params(country, paging)
            };
            print_json(&client.geo_top_tracks(&params).await?, compact)
        }
        GeoCommands::TopArtists { country, paging } => {
            let page = client.geo_top_artists(&geo_params(country, paging)).await?;
            print_json(&page, compact)
        }
    }
}

pub async fn handle_tag(
    client: &LastFmClient,
    command: TagCommands,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TagCommands::TopTracks { tag, paging } => {
            print_json(&client.tag_top_tracks(&tag_params(tag, paging)).await?, compact)
        }
        TagCommands::TopArtists { tag, paging } => {
            print_json(&client.tag_top_artists(&tag_params(tag, paging)).await?, compact)
        }
        TagCommands::TopAlbums { tag, paging } => {
            print_json(&client.tag_top_albums(&tag_params(tag, paging)).await?, compact)
        }
    }
}
