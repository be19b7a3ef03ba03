use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::exercise::{Difficulty, Exercise};
use crate::models::muscle_group::MuscleGroup;

/// Seed the starter exercise catalog when the collection is empty.
/// Returns whether anything was inserted.
#[tracing::instrument(name = "Seed exercise catalog", skip(pool))]
pub async fn seed_exercises_if_empty(pool: &PgPool) -> Result<bool, sqlx::Error> {
    if db::exercises::count(pool).await? > 0 {
        return Ok(false);
    }
    for exercise in default_exercises() {
        db::exercises::insert(pool, &exercise).await?;
    }
    tracing::info!("Seeded default exercise catalog");
    Ok(true)
}

/// Seed the default muscle groups when the collection is empty.
#[tracing::instrument(name = "Seed muscle groups", skip(pool))]
pub async fn seed_muscle_groups_if_empty(pool: &PgPool) -> Result<bool, sqlx::Error> {
    if db::muscle_groups::count(pool).await? > 0 {
        return Ok(false);
    }
    for group in default_muscle_groups() {
        db::muscle_groups::insert(pool, &group).await?;
    }
    tracing::info!("Seeded default muscle groups");
    Ok(true)
}

fn default_muscle_groups() -> Vec<MuscleGroup> {
    ["Peito", "Costas", "Pernas", "Bíceps", "Tríceps", "Ombros", "Core", "Glúteos"]
        .into_iter()
        .map(|name| MuscleGroup {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image_background: String::new(),
        })
        .collect()
}

struct SeedExercise {
    name: &'static str,
    muscle_group: &'static str,
    difficulty: Difficulty,
    reps: i32,
    photo: &'static str,
    video: &'static str,
}

fn default_exercises() -> Vec<Exercise> {
    let seeds = [
        SeedExercise {
            name: "Supino Reto com Barra",
            muscle_group: "Peito",
            difficulty: Difficulty::Beginner,
            reps: 10,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Barbell-Bench-Press-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=rT7DgCr-3_I",
        },
        SeedExercise {
            name: "Supino Inclinado com Halteres",
            muscle_group: "Peito",
            difficulty: Difficulty::Intermediate,
            reps: 10,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Incline-Dumbbell-Press-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=8iPEnn-ltC8",
        },
        SeedExercise {
            name: "Supino Declinado com Barra",
            muscle_group: "Peito",
            difficulty: Difficulty::Intermediate,
            reps: 10,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Decline-Barbell-Press-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=LfyQBUKR8B0",
        },
        SeedExercise {
            name: "Crucifixo com Halteres",
            muscle_group: "Peito",
            difficulty: Difficulty::Beginner,
            reps: 12,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Dumbbell-Fly-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=eozkSSdaI5c",
        },
        SeedExercise {
            name: "Flexão de Braço",
            muscle_group: "Peito",
            difficulty: Difficulty::Beginner,
            reps: 15,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Push-Up-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=IODxDxX7oi4",
        },
        SeedExercise {
            name: "Supino Reto com Halteres",
            muscle_group: "Peito",
            difficulty: Difficulty::Beginner,
            reps: 10,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Dumbbell-Bench-Press-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=VmB1G1K7v94",
        },
        SeedExercise {
            name: "Crucifixo na Polia Alta",
            muscle_group: "Peito",
            difficulty: Difficulty::Intermediate,
            reps: 12,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Cable-Fly-High-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=taI4Xdh3a8k",
        },
        SeedExercise {
            name: "Puxada Frontal na Polia",
            muscle_group: "Costas",
            difficulty: Difficulty::Beginner,
            reps: 10,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Lat-Pulldown-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=CAwf7n6Luuc",
        },
        SeedExercise {
            name: "Agachamento Livre com Barra",
            muscle_group: "Pernas",
            difficulty: Difficulty::Intermediate,
            reps: 10,
            photo: "https://www.menshealth.com/wp-content/uploads/2019/03/Barbell-Squat-1200x1200.jpg",
            video: "https://www.youtube.com/watch?v=Dy28eq2PjcM",
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Exercise {
            id: Uuid::new_v4(),
            name: seed.name.to_string(),
            muscle_groups: vec![seed.muscle_group.to_string()],
            difficulty: seed.difficulty,
            recommended_age_range: "18-60".to_string(),
            sets: 3,
            reps: seed.reps,
            weight: 0,
            rest: 60,
            photo: seed.photo.to_string(),
            demo_images: Vec::new(),
            video: seed.video.to_string(),
        })
        .collect()
}
