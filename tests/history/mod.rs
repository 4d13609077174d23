mod empty_repository_lists_nothing;
mod list_visited_branches_most_recent_last;
mod max_count_limits_to_most_recent;
