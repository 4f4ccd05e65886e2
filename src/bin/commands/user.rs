use super::utils::print_json;
use super::{PageArgs, UserCommands};
use lastfm_api::{
    AsyncPaginatedIterator, DateRange, LastFmClient, Period, RecentTracksParams, UserPageParams,
    UserTopParams, WeeklyChartParams,
};

fn top_params(user: String, period: Option<Period>, paging: PageArgs) -> UserTopParams {
    UserTopParams {
        period,
        page: paging.page,
        limit: paging.limit,
        ..UserTopParams::new(user)
    }
}

fn page_params(user: String, paging: PageArgs) -> UserPageParams {
    UserPageParams {
        page: paging.page,
        limit: paging.limit,
        ..UserPageParams::new(user)
    }
}

fn weekly_params(user: String, from: Option<u64>, to: Option<u64>) -> WeeklyChartParams {
    let params = WeeklyChartParams::new(user);
    match (from, to) {
        (Some(from), Some(to)) => params.with_range(DateRange { from, to }),
        _ => params,
    }
}

pub async fn handle_user(
    client: &LastFmClient,
    command: UserCommands,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        UserCommands::Info { user } => print_json(&client.user_info(&user).await?, compact),
        UserCommands::Session { sk } => {
            print_json(&client.user_info_by_session(&sk).await?, compact)
        }
        UserCommands::Recent {
            user,
            extended,
            all,
            max,
            from,
            to,
            paging,
        } => {
            let params = RecentTracksParams {
                from,
                to,
                page: paging.page,
                limit: paging.limit,
                ..RecentTracksParams::new(user)
            };

            if all {
                let mut tracks = client.recent_tracks(params);
                let collected = tracks.take(max).await?;
                log::debug!(
                    "Collected {} scrobbles over {} page(s)",
                    collected.len(),
                    tracks.current_page()
                );
                print_json(&collected, compact)
            } else if extended {
                print_json(&client.user_extended_recent_tracks(&params).await?, compact)
            } else {
                print_json(&client.user_recent_tracks(&params).await?, compact)
            }
        }
        UserCommands::TopTracks {
            user,
            period,
            paging,
        } => {
            let page = client.user_top_tracks(&top_params(user, period, paging)).await?;
            print_json(&page, compact)
        }
        UserCommands::TopArtists {
            user,
            period,
            paging,
        } => {
            let page = client.user_top_artists(&top_params(user, period, paging)).await?;
            print_json(&page, compact)
        }
        UserCommands::TopAlbums {
            user,
            period,
            paging,
        } => {
            let page = client.user_top_albums(&top_params(user, period, paging)).await?;
            print_json(&page, compact)
        }
        UserCommands::Loved { user, paging } => {
            let page = client.user_loved_tracks(&page_params(user, paging)).await?;
            print_json(&page, compact)
        }
        UserCommands::Friends { user, paging } => {
            let page = client.user_friends(&page_params(user, paging)).await?;
            print_json(&page, compact)
        }
        UserCommands::WeeklyTracks { user, from, to } => {
            let chart = client
                .user_weekly_track_chart(&weekly_params(user, from, to))
                .await?;
            print_json(&chart, compact)
        }
        UserCommands::WeeklyArtists { user, from, to } => {
            let chart = client
                .user_weekly_artist_chart(&weekly_params(user, from, to))
                .await?;
            print_json(&chart, compact)
        }
        UserCommands::WeeklyAlbums { user, from, to } => {
            let chart = client
                .user_weekly_album_chart(&weekly_params(user, from, to))
                .await?;
            print_json(&chart, compact)
        }
        UserCommands::WeeklyChartList { user } => {
            print_json(&client.user_weekly_chart_list(&user).await?, compact)
        }
    }
}
