use super::utils::print_json;
use super::{ArtistCommands, PageArgs};
use lastfm_api::{ArtistInfoParams, ArtistSimilarParams, ArtistTopParams, LastFmClient, SearchParams};

fn top_params(artist: String, paging: PageArgs) -> ArtistTopParams {
    ArtistTopParams {
        page: paging.page,
        limit: paging.limit,
        ..ArtistTopParams::new(artist)
    }
}

pub async fn handle_artist(
    client: &LastFmClient,
    command: ArtistCommands,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ArtistCommands::Info {
            artist,
            mbid,
            username,
            lang,
        } => {
            let params = ArtistInfoParams {
                artist,
                mbid,
                username,
                lang,
                ..Default::default()
            };
            print_json(&client.artist_info(&params).await?, compact)
        }
        ArtistCommands::Similar { artist, limit } => {
            let params = ArtistSimilarParams {
                limit,
                ..ArtistSimilarParams::new(artist)
            };
            print_json(&client.artist_similar(&params).await?, compact)
        }
        ArtistCommands::TopTracks { artist, paging } => {
            let page = client.artist_top_tracks(&top_params(artist, paging)).await?;
            print_json(&page, compact)
        }
        ArtistCommands::TopAlbums { artist, paging } => {
            let page = client.artist_top_albums(&top_params(artist, paging)).await?;
            print_json(&page, compact)
        }
        ArtistCommands::Search { query, paging } => {
            let params = SearchParams {
                page: paging.page,
                limit: paging.limit,
                ..SearchParams::new(query)
            };
            print_json(&client.artist_search(&params).await?, compact)
        }
    }
}
