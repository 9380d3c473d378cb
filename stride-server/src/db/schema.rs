/// SQL schema for the Stride database
/// Creates all tables with proper constraints, foreign keys, and indexes
pub const SCHEMA: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT UNIQUE NOT NULL,
    join_date TEXT NOT NULL
);

-- Activities table
CREATE TABLE IF NOT EXISTS activities (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    activity_type TEXT NOT NULL,
    distance_m REAL CHECK(distance_m IS NULL OR distance_m >= 0),
    duration_sec REAL NOT NULL CHECK(duration_sec > 0),
    elevation_gain_m REAL,
    start_time TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

-- Indexes for the grouping queries
CREATE INDEX IF NOT EXISTS idx_activities_user_id ON activities(user_id);
CREATE INDEX IF NOT EXISTS idx_activities_start_time ON activities(start_time);
CREATE INDEX IF NOT EXISTS idx_activities_type ON activities(activity_type);

-- Comments table
CREATE TABLE IF NOT EXISTS comments (
    id TEXT PRIMARY KEY,
    activity_id TEXT NOT NULL,
    author_id TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (activity_id) REFERENCES activities(id) ON DELETE CASCADE,
    FOREIGN KEY (author_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_comments_activity_id ON comments(activity_id);

-- Kudos table (one per user per activity)
CREATE TABLE IF NOT EXISTS kudos (
    id TEXT PRIMARY KEY,
    activity_id TEXT NOT NULL,
    author_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(activity_id, author_id),
    FOREIGN KEY (activity_id) REFERENCES activities(id) ON DELETE CASCADE,
    FOREIGN KEY (author_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_kudos_activity_id ON kudos(activity_id);

-- Followers table (directed edges, unique per ordered pair)
CREATE TABLE IF NOT EXISTS followers (
    follower_id TEXT NOT NULL,
    followed_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    PRIMARY KEY (follower_id, followed_id),
    FOREIGN KEY (follower_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (followed_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_followers_followed ON followers(followed_id);
"#;

/// Test data for development and testing
/// Covers every analytics view:
/// - 8 users spanning all three activity tiers
/// - activities across five months with mixed types, zero and NULL distances
/// - comments and kudos producing varied engagement scores
/// - follower edges with two users at or above the influencer threshold
pub const TEST_DATA: &str = r#"
-- ============================================================================
-- TEST USERS
-- ============================================================================
INSERT OR IGNORE INTO users (id, username, join_date) VALUES
    ('550e8400-e29b-41d4-a716-446655440001', 'ada', '2024-01-01T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440002', 'boris', '2024-01-02T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440003', 'chen', '2024-01-03T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440004', 'dana', '2024-01-04T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440005', 'emre', '2024-01-05T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440006', 'freya', '2024-01-06T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440007', 'gus', '2024-01-07T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440008', 'hana', '2024-01-08T00:00:00Z');

-- ============================================================================
-- ACTIVITIES
-- ============================================================================
-- ada: 12 activities (Pro Athlete), highest total distance
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440101', '550e8400-e29b-41d4-a716-446655440001', 'Run', 8000, 2400, 60, '2024-01-10T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440102', '550e8400-e29b-41d4-a716-446655440001', 'Run', 10000, 3000, 110, '2024-01-18T07:30:00Z'),
    ('650e8400-e29b-41d4-a716-446655440103', '550e8400-e29b-41d4-a716-446655440001', 'Ride', 42000, 6300, 380, '2024-01-27T09:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440104', '550e8400-e29b-41d4-a716-446655440001', 'Run', 12000, 3500, 95, '2024-02-03T07:15:00Z'),
    ('650e8400-e29b-41d4-a716-446655440105', '550e8400-e29b-41d4-a716-446655440001', 'Ride', 55000, 8100, 640, '2024-02-11T08:45:00Z'),
    ('650e8400-e29b-41d4-a716-446655440106', '550e8400-e29b-41d4-a716-446655440001', 'Swim', 2000, 2700, NULL, '2024-02-20T06:30:00Z'),
    ('650e8400-e29b-41d4-a716-446655440107', '550e8400-e29b-41d4-a716-446655440001', 'Run', 21097, 6600, 180, '2024-03-05T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440108', '550e8400-e29b-41d4-a716-446655440001', 'Hike', 14000, 14400, 950, '2024-03-16T08:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440109', '550e8400-e29b-41d4-a716-446655440001', 'Run', 9500, 2850, 70, '2024-03-24T07:10:00Z'),
    ('650e8400-e29b-41d4-a716-446655440110', '550e8400-e29b-41d4-a716-446655440001', 'Ride', 38000, 5400, 290, '2024-04-06T09:30:00Z'),
    ('650e8400-e29b-41d4-a716-446655440111', '550e8400-e29b-41d4-a716-446655440001', 'Run', 10500, 3100, 85, '2024-04-14T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440112', '550e8400-e29b-41d4-a716-446655440001', 'Swim', 2500, 3300, NULL, '2024-05-02T06:45:00Z');

-- boris: 5 activities (Active)
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440201', '550e8400-e29b-41d4-a716-446655440002', 'Ride', 30000, 4800, 210, '2024-01-14T10:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440202', '550e8400-e29b-41d4-a716-446655440002', 'Ride', 25000, 4200, 160, '2024-02-09T10:30:00Z'),
    ('650e8400-e29b-41d4-a716-446655440203', '550e8400-e29b-41d4-a716-446655440002', 'Run', 6000, 2100, 40, '2024-02-25T08:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440204', '550e8400-e29b-41d4-a716-446655440002', 'Ride', 33000, 5100, 275, '2024-03-12T09:45:00Z'),
    ('650e8400-e29b-41d4-a716-446655440205', '550e8400-e29b-41d4-a716-446655440002', 'Run', 7500, 2600, 55, '2024-04-21T08:15:00Z');

-- chen: 3 activities (Active, boundary)
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440301', '550e8400-e29b-41d4-a716-446655440003', 'Swim', 1500, 2100, NULL, '2024-01-21T06:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440302', '550e8400-e29b-41d4-a716-446655440003', 'Swim', 1800, 2400, NULL, '2024-03-08T06:15:00Z'),
    ('650e8400-e29b-41d4-a716-446655440303', '550e8400-e29b-41d4-a716-446655440003', 'Run', 5000, 1900, 30, '2024-04-28T07:40:00Z');

-- dana: 2 activities (Beginner), zero-distance only -> excluded from leaderboard
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440401', '550e8400-e29b-41d4-a716-446655440004', 'Yoga', 0, 3600, NULL, '2024-02-05T18:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440402', '550e8400-e29b-41d4-a716-446655440004', 'Yoga', 0, 2700, NULL, '2024-03-19T18:30:00Z');

-- emre: 1 activity (Beginner), NULL distance -> excluded from leaderboard
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440501', '550e8400-e29b-41d4-a716-446655440005', 'Yoga', NULL, 3000, NULL, '2024-01-30T19:00:00Z');

-- freya: no activities (Beginner with zero count)

-- gus: 4 activities (Active), one zero-distance treadmill session
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440601', '550e8400-e29b-41d4-a716-446655440007', 'Run', 0, 1800, 0, '2024-01-25T12:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440602', '550e8400-e29b-41d4-a716-446655440007', 'Hike', 11000, 10800, 720, '2024-02-17T09:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440603', '550e8400-e29b-41d4-a716-446655440007', 'Hike', 9000, 9000, 530, '2024-03-30T09:30:00Z'),
    ('650e8400-e29b-41d4-a716-446655440604', '550e8400-e29b-41d4-a716-446655440007', 'Run', 6500, 2300, 45, '2024-05-11T08:00:00Z');

-- hana: 10 activities (Pro Athlete, boundary)
INSERT OR IGNORE INTO activities (id, user_id, activity_type, distance_m, duration_sec, elevation_gain_m, start_time) VALUES
    ('650e8400-e29b-41d4-a716-446655440701', '550e8400-e29b-41d4-a716-446655440008', 'Run', 5000, 1700, 25, '2024-01-05T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440702', '550e8400-e29b-41d4-a716-446655440008', 'Run', 5200, 1750, 30, '2024-01-19T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440703', '550e8400-e29b-41d4-a716-446655440008', 'Run', 5400, 1800, 30, '2024-02-02T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440704', '550e8400-e29b-41d4-a716-446655440008', 'Run', 5600, 1850, 35, '2024-02-16T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440705', '550e8400-e29b-41d4-a716-446655440008', 'Swim', 1200, 1800, NULL, '2024-02-28T06:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440706', '550e8400-e29b-41d4-a716-446655440008', 'Run', 5800, 1900, 35, '2024-03-10T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440707', '550e8400-e29b-41d4-a716-446655440008', 'Run', 6000, 1950, 40, '2024-03-22T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440708', '550e8400-e29b-41d4-a716-446655440008', 'Ride', 28000, 4500, 190, '2024-04-03T09:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440709', '550e8400-e29b-41d4-a716-446655440008', 'Run', 6200, 2000, 40, '2024-04-18T07:00:00Z'),
    ('650e8400-e29b-41d4-a716-446655440710', '550e8400-e29b-41d4-a716-446655440008', 'Run', 6400, 2050, 45, '2024-05-06T07:00:00Z');

-- ============================================================================
-- COMMENTS
-- ============================================================================
INSERT OR IGNORE INTO comments (id, activity_id, author_id, content, created_at) VALUES
    ('750e8400-e29b-41d4-a716-446655440001', '650e8400-e29b-41d4-a716-446655440103', '550e8400-e29b-41d4-a716-446655440002', 'Monster ride, that climb is brutal', '2024-01-27T12:00:00Z'),
    ('750e8400-e29b-41d4-a716-446655440002', '650e8400-e29b-41d4-a716-446655440103', '550e8400-e29b-41d4-a716-446655440003', 'Which route did you take?', '2024-01-27T13:10:00Z'),
    ('750e8400-e29b-41d4-a716-446655440003', '650e8400-e29b-41d4-a716-446655440103', '550e8400-e29b-41d4-a716-446655440008', 'Pacing looked perfect', '2024-01-27T14:25:00Z'),
    ('750e8400-e29b-41d4-a716-446655440004', '650e8400-e29b-41d4-a716-446655440107', '550e8400-e29b-41d4-a716-446655440008', 'Half marathon PB?', '2024-03-05T10:00:00Z'),
    ('750e8400-e29b-41d4-a716-446655440005', '650e8400-e29b-41d4-a716-446655440204', '550e8400-e29b-41d4-a716-446655440001', 'Nice average speed', '2024-03-12T12:30:00Z'),
    ('750e8400-e29b-41d4-a716-446655440006', '650e8400-e29b-41d4-a716-446655440302', '550e8400-e29b-41d4-a716-446655440004', 'Pool or open water?', '2024-03-08T08:00:00Z');

-- ============================================================================
-- KUDOS
-- ============================================================================
INSERT OR IGNORE INTO kudos (id, activity_id, author_id, created_at) VALUES
    ('850e8400-e29b-41d4-a716-446655440001', '650e8400-e29b-41d4-a716-446655440103', '550e8400-e29b-41d4-a716-446655440004', '2024-01-27T11:00:00Z'),
    ('850e8400-e29b-41d4-a716-446655440002', '650e8400-e29b-41d4-a716-446655440103', '550e8400-e29b-41d4-a716-446655440005', '2024-01-27T11:30:00Z'),
    ('850e8400-e29b-41d4-a716-446655440003', '650e8400-e29b-41d4-a716-446655440107', '550e8400-e29b-41d4-a716-446655440002', '2024-03-05T09:00:00Z'),
    ('850e8400-e29b-41d4-a716-446655440004', '650e8400-e29b-41d4-a716-446655440107', '550e8400-e29b-41d4-a716-446655440003', '2024-03-05T09:15:00Z'),
    ('850e8400-e29b-41d4-a716-446655440005', '650e8400-e29b-41d4-a716-446655440204', '550e8400-e29b-41d4-a716-446655440008', '2024-03-12T11:00:00Z'),
    ('850e8400-e29b-41d4-a716-446655440006', '650e8400-e29b-41d4-a716-446655440204', '550e8400-e29b-41d4-a716-446655440003', '2024-03-12T11:45:00Z'),
    ('850e8400-e29b-41d4-a716-446655440007', '650e8400-e29b-41d4-a716-446655440602', '550e8400-e29b-41d4-a716-446655440001', '2024-02-17T13:00:00Z');

-- ============================================================================
-- FOLLOWERS
-- ============================================================================
-- ada has 5 incoming edges, dana 2 (both influencers); hana 1 (below threshold)
INSERT OR IGNORE INTO followers (follower_id, followed_id, created_at) VALUES
    ('550e8400-e29b-41d4-a716-446655440002', '550e8400-e29b-41d4-a716-446655440001', '2024-01-09T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440003', '550e8400-e29b-41d4-a716-446655440001', '2024-01-10T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440004', '550e8400-e29b-41d4-a716-446655440001', '2024-01-12T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440005', '550e8400-e29b-41d4-a716-446655440001', '2024-01-15T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440006', '550e8400-e29b-41d4-a716-446655440001', '2024-01-20T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440001', '550e8400-e29b-41d4-a716-446655440004', '2024-02-01T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440008', '550e8400-e29b-41d4-a716-446655440004', '2024-02-03T00:00:00Z'),
    ('550e8400-e29b-41d4-a716-446655440001', '550e8400-e29b-41d4-a716-446655440008', '2024-02-10T00:00:00Z');
"#;
