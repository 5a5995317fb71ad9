use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use super::model::{Catalog, MovieRecord};
use super::rng::SimpleRng;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Loader failure. A *missing* file is not an error (it selects the fallback
/// dataset); a file that exists but violates the schema is.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but its structure or contents are invalid. Never
    /// papered over with the fallback dataset.
    #[error("malformed catalog file: {0}")]
    Format(String),

    #[error("unsupported catalog file extension: .{0}")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Conventional catalog location, used when no path is given.
pub const DEFAULT_CATALOG_PATH: &str = "movies_data.csv";

/// Required tabular columns, header row, UTF-8.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "movie_id",
    "title",
    "year",
    "genre",
    "language",
    "rating",
    "actor",
    "actress",
    "poster_url",
];

/// Load the catalog for a session.
///
/// * `source` of `None` resolves to [`DEFAULT_CATALOG_PATH`].
/// * A missing file is the expected demo condition: the generated fallback
///   dataset is returned, seeded by `fallback_seed` so tests reproduce it.
/// * A present file is parsed by extension (`.csv` or `.json`); structural
///   problems surface as [`LoadError::Format`].
///
/// Call once per session and keep the result; nothing here is worth
/// re-parsing per interaction.
pub fn load(source: Option<&Path>, fallback_seed: u64) -> Result<Catalog, LoadError> {
    let path = source.unwrap_or_else(|| Path::new(DEFAULT_CATALOG_PATH));
    if !path.exists() {
        log::info!(
            "no catalog file at {}; using the generated fallback dataset",
            path.display()
        );
        return Ok(fallback_catalog(fallback_seed));
    }
    load_file(path)
}

/// Parse an existing catalog file. Dispatch by extension.
pub fn load_file(path: &Path) -> Result<Catalog, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let catalog = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };
    log::info!(
        "loaded {} records from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Catalog, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.to_string())
        .collect();
    check_columns(&headers)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<MovieRecord>() {
        records.push(result.map_err(csv_error)?);
    }
    validate(&records)?;
    Ok(Catalog::from_records(records))
}

fn csv_error(err: csv::Error) -> LoadError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => LoadError::Io(io),
        _ => LoadError::Format(message),
    }
}

fn check_columns(headers: &[String]) -> Result<(), LoadError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::Format(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let extra: Vec<&str> = headers
        .iter()
        .map(|h| h.as_str())
        .filter(|h| !REQUIRED_COLUMNS.contains(h))
        .collect();
    if !extra.is_empty() {
        return Err(LoadError::Format(format!(
            "unexpected column(s): {}",
            extra.join(", ")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON: a top-level array of objects keyed like the CSV
/// columns (`movie_id`, `title`, ...).
fn load_json(path: &Path) -> Result<Catalog, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<MovieRecord> =
        serde_json::from_str(&text).map_err(|e| LoadError::Format(e.to_string()))?;
    validate(&records)?;
    Ok(Catalog::from_records(records))
}

// ---------------------------------------------------------------------------
// Record validation
// ---------------------------------------------------------------------------

/// Invariants every record must satisfy before entering the engine:
/// positive unique id, non-empty title, rating within [0, 10].
fn validate(records: &[MovieRecord]) -> Result<(), LoadError> {
    let mut seen_ids: HashSet<u32> = HashSet::with_capacity(records.len());
    for rec in records {
        if rec.id == 0 {
            return Err(LoadError::Format(format!(
                "'{}': movie_id must be positive",
                rec.title
            )));
        }
        if !seen_ids.insert(rec.id) {
            return Err(LoadError::Format(format!(
                "duplicate movie_id {}",
                rec.id
            )));
        }
        if rec.title.trim().is_empty() {
            return Err(LoadError::Format(format!(
                "movie_id {}: title is empty",
                rec.id
            )));
        }
        if !(0.0..=10.0).contains(&rec.rating) {
            return Err(LoadError::Format(format!(
                "movie_id {}: rating {} outside [0, 10]",
                rec.id, rec.rating
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Fallback dataset
// ---------------------------------------------------------------------------

/// Fixed language partition of the fallback dataset: 100 records total.
pub const LANGUAGE_BLOCKS: [(&str, usize); 6] = [
    ("English", 20),
    ("Hindi", 20),
    ("Telugu", 20),
    ("Tamil", 15),
    ("Malayalam", 10),
    ("Kannada", 15),
];

const GENRES: [&str; 10] = [
    "Drama",
    "Action",
    "Comedy",
    "Thriller",
    "Romance",
    "Sci-Fi",
    "Adventure",
    "Fantasy",
    "Crime",
    "Horror",
];

const YEAR_RANGE: (i32, i32) = (1990, 2023);
const RATING_RANGE: (f64, f64) = (5.0, 10.0);

// Curated pools, aligned positionally with LANGUAGE_BLOCKS: entries
// [0, 20) are English, [20, 40) Hindi, [40, 60) Telugu, [60, 75) Tamil,
// [75, 85) Malayalam, [85, 100) Kannada.

const TITLES: [&str; 100] = [
    // English
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Forrest Gump",
    "Inception",
    "The Matrix",
    "Interstellar",
    "Fight Club",
    "Goodfellas",
    "The Lord of the Rings: The Fellowship of the Ring",
    "The Silence of the Lambs",
    "Saving Private Ryan",
    "The Green Mile",
    "Schindler's List",
    "Gladiator",
    "The Departed",
    "The Prestige",
    "The Lion King",
    "Titanic",
    // Hindi
    "Dangal",
    "PK",
    "3 Idiots",
    "Bajrangi Bhaijaan",
    "Lagaan",
    "Gully Boy",
    "Dil Chahta Hai",
    "Zindagi Na Milegi Dobara",
    "Queen",
    "Andhadhun",
    "Gangs of Wasseypur",
    "Barfi!",
    "Dil Dhadakne Do",
    "Kabhi Khushi Kabhie Gham",
    "Rang De Basanti",
    "Taare Zameen Par",
    "Lage Raho Munna Bhai",
    "Swades",
    "Chak De! India",
    "Drishyam",
    // Telugu
    "Baahubali: The Beginning",
    "Baahubali 2: The Conclusion",
    "Arjun Reddy",
    "RRR",
    "Pushpa: The Rise",
    "Ala Vaikunthapurramuloo",
    "Magadheera",
    "Eega",
    "Sye Raa Narasimha Reddy",
    "Jersey",
    "Mahanati",
    "Rangasthalam",
    "Fidaa",
    "Pokiri",
    "Athadu",
    "Okkadu",
    "Nuvvu Nenu",
    "Kushi",
    "Bommarillu",
    "Awe!",
    // Tamil
    "Vikram",
    "Master",
    "Vada Chennai",
    "Super Deluxe",
    "Asuran",
    "Kaithi",
    "Pariyerum Perumal",
    "96",
    "Aruvi",
    "Visaranai",
    "Jai Bhim",
    "Soorarai Pottru",
    "Karnan",
    "Thevar Magan",
    "Peranbu",
    // Malayalam
    "Drishyam",
    "Kumbalangi Nights",
    "Premam",
    "Bangalore Days",
    "Maheshinte Prathikaaram",
    "Thondimuthalum Driksakshiyum",
    "Ee.Ma.Yau",
    "Jallikattu",
    "Angamaly Diaries",
    "Sudani from Nigeria",
    // Kannada
    "KGF: Chapter 1",
    "KGF: Chapter 2",
    "Kantara",
    "Lucia",
    "Ulidavaru Kandanthe",
    "Rangitaranga",
    "U Turn",
    "Kirik Party",
    "Dia",
    "Godhi Banna Sadharana Mykattu",
    "Avane Srimannarayana",
    "Charlie 777",
    "Garuda Gamana Vrishabha Vahana",
    "Sapta Sagaradaache Ello",
    "Mungaru Male",
];

const ACTORS: [&str; 100] = [
    // English
    "Tom Hanks",
    "Leonardo DiCaprio",
    "Brad Pitt",
    "Robert Downey Jr.",
    "Denzel Washington",
    "Christian Bale",
    "Tom Cruise",
    "Johnny Depp",
    "Morgan Freeman",
    "Matt Damon",
    "Hugh Jackman",
    "Will Smith",
    "Matthew McConaughey",
    "Ryan Gosling",
    "Chris Hemsworth",
    "Chris Evans",
    "Keanu Reeves",
    "Joaquin Phoenix",
    "Jake Gyllenhaal",
    "Benedict Cumberbatch",
    // Hindi
    "Aamir Khan",
    "Shah Rukh Khan",
    "Salman Khan",
    "Amitabh Bachchan",
    "Ranbir Kapoor",
    "Ranveer Singh",
    "Hrithik Roshan",
    "Akshay Kumar",
    "Irrfan Khan",
    "Nawazuddin Siddiqui",
    "Rajkummar Rao",
    "Ayushmann Khurrana",
    "Vicky Kaushal",
    "Pankaj Tripathi",
    "Manoj Bajpayee",
    "Ajay Devgn",
    "Varun Dhawan",
    "Shahid Kapoor",
    "Sushant Singh Rajput",
    "Anil Kapoor",
    // Telugu
    "Prabhas",
    "Allu Arjun",
    "Ram Charan",
    "Jr NTR",
    "Mahesh Babu",
    "Nani",
    "Vijay Deverakonda",
    "Chiranjeevi",
    "Nagarjuna",
    "Venkatesh",
    "Ravi Teja",
    "Naga Chaitanya",
    "Rana Daggubati",
    "Sai Dharam Tej",
    "Nikhil Siddhartha",
    "Adivi Sesh",
    "Sudheer Babu",
    "Sharwanand",
    "Naveen Polishetty",
    "Vishwak Sen",
    // Tamil
    "Vijay",
    "Ajith Kumar",
    "Suriya",
    "Dhanush",
    "Vikram",
    "Kamal Haasan",
    "Rajinikanth",
    "Karthi",
    "Sivakarthikeyan",
    "Vijay Sethupathi",
    "Madhavan",
    "Arya",
    "Jayam Ravi",
    "Simbu",
    "Vishal",
    // Malayalam
    "Mohanlal",
    "Mammootty",
    "Fahadh Faasil",
    "Dulquer Salmaan",
    "Nivin Pauly",
    "Tovino Thomas",
    "Prithviraj Sukumaran",
    "Asif Ali",
    "Kunchacko Boban",
    "Biju Menon",
    // Kannada
    "Yash",
    "Sudeep",
    "Darshan",
    "Puneeth Rajkumar",
    "Upendra",
    "Rakshit Shetty",
    "Ganesh",
    "Shiva Rajkumar",
    "Duniya Vijay",
    "Dhruva Sarja",
    "Diganth",
    "Prajwal Devaraj",
    "Srimurali",
    "Dhananjay",
    "Rishabh Shetty",
];

const ACTRESSES: [&str; 100] = [
    // English
    "Meryl Streep",
    "Jennifer Lawrence",
    "Scarlett Johansson",
    "Emma Stone",
    "Natalie Portman",
    "Cate Blanchett",
    "Anne Hathaway",
    "Viola Davis",
    "Nicole Kidman",
    "Kate Winslet",
    "Charlize Theron",
    "Emma Watson",
    "Jessica Chastain",
    "Amy Adams",
    "Margot Robbie",
    "Saoirse Ronan",
    "Brie Larson",
    "Jennifer Aniston",
    "Sandra Bullock",
    "Angelina Jolie",
    // Hindi
    "Deepika Padukone",
    "Alia Bhatt",
    "Priyanka Chopra",
    "Kareena Kapoor",
    "Katrina Kaif",
    "Vidya Balan",
    "Kangana Ranaut",
    "Anushka Sharma",
    "Taapsee Pannu",
    "Shraddha Kapoor",
    "Kiara Advani",
    "Kriti Sanon",
    "Sara Ali Khan",
    "Janhvi Kapoor",
    "Bhumi Pednekar",
    "Sonam Kapoor",
    "Madhuri Dixit",
    "Kajol",
    "Rani Mukerji",
    "Aishwarya Rai",
    // Telugu
    "Samantha Ruth Prabhu",
    "Anushka Shetty",
    "Kajal Aggarwal",
    "Pooja Hegde",
    "Rashmika Mandanna",
    "Keerthy Suresh",
    "Nayanthara",
    "Tamannaah Bhatia",
    "Rakul Preet Singh",
    "Sai Pallavi",
    "Shruti Haasan",
    "Nithya Menen",
    "Ritu Varma",
    "Raashi Khanna",
    "Regina Cassandra",
    "Lavanya Tripathi",
    "Eesha Rebba",
    "Mehreen Pirzada",
    "Nabha Natesh",
    "Krithi Shetty",
    // Tamil
    "Trisha Krishnan",
    "Jyothika",
    "Aishwarya Rajesh",
    "Keerthy Suresh",
    "Nayanthara",
    "Samantha Ruth Prabhu",
    "Kajal Aggarwal",
    "Tamannaah Bhatia",
    "Shruti Haasan",
    "Nithya Menen",
    "Aishwarya Rai",
    "Amala Paul",
    "Hansika Motwani",
    "Anushka Shetty",
    "Sai Pallavi",
    // Malayalam
    "Manju Warrier",
    "Parvathy Thiruvothu",
    "Nazriya Nazim",
    "Nayanthara",
    "Nimisha Sajayan",
    "Anna Ben",
    "Aishwarya Lekshmi",
    "Aparna Balamurali",
    "Grace Antony",
    "Rajisha Vijayan",
    // Kannada
    "Rachita Ram",
    "Radhika Pandit",
    "Rashmika Mandanna",
    "Shanvi Srivastava",
    "Shraddha Srinath",
    "Haripriya",
    "Ashika Ranganath",
    "Nabha Natesh",
    "Srinidhi Shetty",
    "Aditi Prabhudeva",
    "Meghana Raj",
    "Ragini Dwivedi",
    "Amulya",
    "Malashri",
    "Ramya",
];

/// Build the synthetic demo catalog: 100 records over the six fixed language
/// blocks, names drawn from the curated pools, year/genre/rating randomized
/// within the documented bounds. The partition and bounds are the contract;
/// the individual randomized values are not.
pub fn fallback_catalog(seed: u64) -> Catalog {
    let mut rng = SimpleRng::new(seed);
    let mut records = Vec::with_capacity(TITLES.len());
    let mut i = 0usize;

    for (language, count) in LANGUAGE_BLOCKS {
        for _ in 0..count {
            // One decimal place, like the source data.
            let rating =
                (rng.gen_range_f64(RATING_RANGE.0, RATING_RANGE.1) * 10.0).round() / 10.0;
            records.push(MovieRecord {
                id: (i + 1) as u32,
                title: TITLES[i].to_string(),
                year: rng.gen_range_i32(YEAR_RANGE.0, YEAR_RANGE.1),
                genre: rng.choice(&GENRES).to_string(),
                language: language.to_string(),
                rating,
                actor: ACTORS[i].to_string(),
                actress: ACTRESSES[i].to_string(),
                poster_url: format!("https://picsum.photos/id/{}/300/450", 100 + i),
            });
            i += 1;
        }
    }
    Catalog::from_records(records)
}
