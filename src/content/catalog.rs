//! Mock in-memory content backing the list and detail pages.

use chrono::NaiveDate;
use serde::Serialize;

use crate::format::format_date_short;
use crate::overlay::{Category, ContentKind, SearchHit};
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
	Draft,
	Published,
}

impl PublishStatus {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			PublishStatus::Draft => "Draf",
			PublishStatus::Published => "Terbit",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
	Upcoming,
	Finished,
}

impl ActivityStatus {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			ActivityStatus::Upcoming => "Akan datang",
			ActivityStatus::Finished => "Selesai",
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct Article {
	pub id: u32,
	pub title: String,
	pub author: String,
	pub topic: String,
	pub published: NaiveDate,
	pub status: PublishStatus,
	pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
	pub id: u32,
	pub name: String,
	pub date: NaiveDate,
	pub location: String,
	pub status: ActivityStatus,
	pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Member {
	pub id: u32,
	pub name: String,
	pub student_id: String,
	pub division_id: u32,
	pub role: String,
	pub joined: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct Division {
	pub id: u32,
	pub name: String,
	pub description: String,
}

/// Every piece of content the console knows about.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	pub articles: Vec<Article>,
	pub activities: Vec<Activity>,
	pub members: Vec<Member>,
	pub divisions: Vec<Division>,
}

impl Catalog {
	/// Deterministic sample content.
	#[must_use]
	pub fn sample() -> Self {
		Self {
			articles: vec![
				Article {
					id: 1,
					title: "Pendaftaran Beasiswa Prestasi 2024 Dibuka".into(),
					author: "Siti Nurhaliza".into(),
					topic: "Informasi".into(),
					published: date(2024, 2, 20),
					status: PublishStatus::Published,
					summary: "Beasiswa prestasi untuk mahasiswa aktif mulai semester tiga.".into(),
				},
				Article {
					id: 2,
					title: "Laporan Kegiatan Bakti Sosial".into(),
					author: "Ahmad Fauzi".into(),
					topic: "Laporan".into(),
					published: date(2024, 3, 4),
					status: PublishStatus::Published,
					summary: "Ringkasan pelaksanaan bakti sosial di Desa Sukamaju.".into(),
				},
				Article {
					id: 3,
					title: "Panduan Pengajuan Proposal Kegiatan".into(),
					author: "Rina Wulandari".into(),
					topic: "Panduan".into(),
					published: date(2024, 3, 18),
					status: PublishStatus::Draft,
					summary: "Langkah menyusun dan mengajukan proposal ke sekretariat.".into(),
				},
			],
			activities: vec![
				Activity {
					id: 1,
					name: "Rapat Kerja Pengurus Periode 2024".into(),
					date: date(2024, 2, 12),
					location: "Aula Gedung B".into(),
					status: ActivityStatus::Finished,
					description: "Penyusunan program kerja tahunan setiap divisi.".into(),
				},
				Activity {
					id: 2,
					name: "Bakti Sosial Desa Sukamaju".into(),
					date: date(2024, 3, 2),
					location: "Desa Sukamaju".into(),
					status: ActivityStatus::Finished,
					description: "Pembagian sembako dan pemeriksaan kesehatan gratis.".into(),
				},
				Activity {
					id: 3,
					name: "Seminar Karier Teknologi".into(),
					date: date(2026, 11, 14),
					location: "Auditorium Utama".into(),
					status: ActivityStatus::Upcoming,
					description: "Diskusi bersama alumni tentang dunia kerja.".into(),
				},
			],
			members: vec![
				member(1, "Ahmad Fauzi", "2110511001", 1, "Ketua Divisi", date(2021, 9, 1)),
				member(2, "Siti Nurhaliza", "2110511014", 2, "Sekretaris", date(2021, 9, 1)),
				member(3, "Budi Santoso", "2210511020", 1, "Anggota", date(2022, 9, 5)),
				member(4, "Rina Wulandari", "2210511033", 3, "Bendahara", date(2022, 9, 5)),
				member(5, "Dewi Lestari", "2310511008", 2, "Anggota", date(2023, 9, 4)),
			],
			divisions: vec![
				Division {
					id: 1,
					name: "Divisi Hubungan Masyarakat".into(),
					description: "Publikasi, media sosial dan relasi eksternal.".into(),
				},
				Division {
					id: 2,
					name: "Divisi Pendidikan".into(),
					description: "Kelas belajar, mentoring dan beasiswa.".into(),
				},
				Division {
					id: 3,
					name: "Divisi Keuangan".into(),
					description: "Anggaran, iuran dan laporan keuangan.".into(),
				},
			],
		}
	}

	#[must_use]
	pub fn article(&self, id: u32) -> Option<&Article> {
		self.articles.iter().find(|article| article.id == id)
	}

	#[must_use]
	pub fn activity(&self, id: u32) -> Option<&Activity> {
		self.activities.iter().find(|activity| activity.id == id)
	}

	#[must_use]
	pub fn member(&self, id: u32) -> Option<&Member> {
		self.members.iter().find(|member| member.id == id)
	}

	#[must_use]
	pub fn division(&self, id: u32) -> Option<&Division> {
		self.divisions.iter().find(|division| division.id == id)
	}

	/// Name of a division, or `-` for dangling references.
	#[must_use]
	pub fn division_name(&self, id: u32) -> &str {
		self.division(id)
			.map(|division| division.name.as_str())
			.unwrap_or("-")
	}

	#[must_use]
	pub fn members_of(&self, division_id: u32) -> impl Iterator<Item = &Member> {
		self.members
			.iter()
			.filter(move |member| member.division_id == division_id)
	}

	/// Number of entries of `kind`.
	#[must_use]
	pub fn count(&self, kind: ContentKind) -> usize {
		match kind {
			ContentKind::Article => self.articles.len(),
			ContentKind::Activity => self.activities.len(),
			ContentKind::Member => self.members.len(),
			ContentKind::Division => self.divisions.len(),
		}
	}

	/// Ids of the entries of `kind`, in list order.
	#[must_use]
	pub fn ids(&self, kind: ContentKind) -> Vec<u32> {
		match kind {
			ContentKind::Article => self.articles.iter().map(|entry| entry.id).collect(),
			ContentKind::Activity => self.activities.iter().map(|entry| entry.id).collect(),
			ContentKind::Member => self.members.iter().map(|entry| entry.id).collect(),
			ContentKind::Division => self.divisions.iter().map(|entry| entry.id).collect(),
		}
	}

	/// Every entry as a search hit pointing at its detail page.
	#[must_use]
	pub fn hits(&self) -> Vec<SearchHit> {
		let articles = self.articles.iter().map(|article| {
			SearchHit::new(
				format!("article-{}", article.id),
				ContentKind::Article,
				article.title.clone(),
				format!("{} · {}", article.topic, format_date_short(article.published)),
				Route::Detail(ContentKind::Article, article.id).path(),
			)
		});
		let activities = self.activities.iter().map(|activity| {
			SearchHit::new(
				format!("activity-{}", activity.id),
				ContentKind::Activity,
				activity.name.clone(),
				format!("{} · {}", activity.location, format_date_short(activity.date)),
				Route::Detail(ContentKind::Activity, activity.id).path(),
			)
		});
		let members = self.members.iter().map(|member| {
			SearchHit::new(
				format!("member-{}", member.id),
				ContentKind::Member,
				member.name.clone(),
				format!("{} · {}", member.role, self.division_name(member.division_id)),
				Route::Detail(ContentKind::Member, member.id).path(),
			)
		});
		let divisions = self.divisions.iter().map(|division| {
			SearchHit::new(
				format!("division-{}", division.id),
				ContentKind::Division,
				division.name.clone(),
				division.description.clone(),
				Route::Detail(ContentKind::Division, division.id).path(),
			)
		});

		articles
			.chain(activities)
			.chain(members)
			.chain(divisions)
			.collect()
	}

	/// Case-insensitive substring search, narrowed by `category`.
	#[must_use]
	pub fn search(&self, query: &str, category: Category) -> Vec<SearchHit> {
		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return Vec::new();
		}
		self.hits()
			.into_iter()
			.filter(|hit| category.admits(hit.kind) && hit.matches_text(&needle))
			.collect()
	}
}

fn member(
	id: u32,
	name: &str,
	student_id: &str,
	division_id: u32,
	role: &str,
	joined: NaiveDate,
) -> Member {
	Member {
		id,
		name: name.into(),
		student_id: student_id.into(),
		division_id,
		role: role.into(),
		joined,
	}
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_references_are_consistent() {
		let catalog = Catalog::sample();
		for member in &catalog.members {
			assert!(catalog.division(member.division_id).is_some());
		}
		assert_eq!(catalog.members_of(1).count(), 2);
		assert_eq!(catalog.count(ContentKind::Division), 3);
	}

	#[test]
	fn search_narrows_by_category_and_links_to_details() {
		let catalog = Catalog::sample();
		let all = catalog.search("bakti", Category::All);
		assert_eq!(all.len(), 2);

		let activities = catalog.search("bakti", Category::Activity);
		assert_eq!(activities.len(), 1);
		assert_eq!(activities[0].destination, "/admin/activities/2");
	}

	#[test]
	fn member_hits_mention_their_division() {
		let catalog = Catalog::sample();
		let hits = catalog.search("budi", Category::Member);
		assert_eq!(hits[0].subtitle, "Anggota · Divisi Hubungan Masyarakat");
	}
}
