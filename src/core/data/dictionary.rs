//! Phrase dictionary: Arabic UI phrase → dotted translation key.
//!
//! The dictionary is an ordered table. Inserting a phrase that is already present
//! overwrites its key but keeps its original position, so the effective mapping is
//! unique per phrase. It is built once (from the built-in table or the config file)
//! and handed to the substitution engine by reference.

use std::{collections::HashMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// Built-in phrase table for the dashboard pages.
const BUILTIN_PHRASES: &[(&str, &str)] = &[
    // Common UI
    ("تحميل", "common.loading"),
    ("حفظ", "common.save"),
    ("إلغاء", "common.cancel"),
    ("حذف", "common.delete"),
    ("تعديل", "common.edit"),
    ("إرسال", "common.submit"),
    ("بحث", "common.search"),
    ("تأكيد", "common.confirm"),
    ("رجوع", "common.back"),
    ("التالي", "common.next"),
    ("السابق", "common.previous"),
    ("إغلاق", "common.close"),
    ("عرض", "common.view"),
    ("التفاصيل", "common.details"),
    ("المزيد", "common.more"),
    ("الكل", "common.all"),
    ("نشط", "common.active"),
    ("الاسم", "common.name"),
    ("البريد الإلكتروني", "common.email"),
    ("رقم الهاتف", "common.phone"),
    ("العنوان", "common.address"),
    ("التاريخ", "common.date"),
    ("الوقت", "common.time"),
    ("الوصف", "common.description"),
    ("رفع", "common.upload"),
    ("تحديث", "common.update"),
    ("إضافة", "common.add"),
    ("إزالة", "common.remove"),
    // Profile
    ("الملف الشخصي", "common.profile"),
    ("تسجيل الخروج", "common.logout"),
    ("لوحة التحكم", "common.dashboard"),
    ("الإعدادات", "common.settings"),
    ("الإشعارات", "common.notifications"),
    // Student
    ("الطالب", "auth.student"),
    ("الطلاب", "teacher.students"),
    ("كورساتي", "student.myCourses"),
    ("دوراتي", "student.myCourses"),
    ("الكورسات", "student.myCourses"),
    ("الدورات", "student.myCourses"),
    ("التقدم", "student.myProgress"),
    ("جلساتي", "student.mySessions"),
    ("الجلسات", "student.mySessions"),
    ("تسجيل الآن", "landing.registerNow"),
    ("استكمل المشاهدة", "student.continueWatching"),
    ("ابدأ الدورة", "student.startCourse"),
    ("عرض الدورة", "student.viewCourse"),
    // Teacher
    ("المحاضر", "auth.teacher"),
    ("المحاضرين", "landing.teachers"),
    ("إنشاء دورة جديدة", "teacher.createCourse"),
    ("إنشاء كورس جديد", "teacher.createCourse"),
    ("الأرباح", "teacher.earnings"),
    ("الإحصائيات", "teacher.statistics"),
    ("الجدول", "landing.schedule"),
    // Company
    ("الشركة", "auth.company"),
    ("الوظائف", "company.myJobs"),
    ("الطلبات", "company.applications"),
    ("نشر وظيفة", "company.postJob"),
    ("إنشاء وظيفة", "company.postJob"),
    // General
    ("مرحباً", "common.welcome"),
    ("مرحبا", "common.welcome"),
    ("نعم", "common.yes"),
    ("لا", "common.no"),
    ("خطأ", "common.error"),
    ("نجح", "common.success"),
];

/// Ordered phrase → key table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseDictionary {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PhraseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the tool.
    pub fn builtin() -> Self {
        BUILTIN_PHRASES.iter().copied().collect()
    }

    /// Insert or overwrite a phrase. Overwriting keeps the phrase's first position.
    pub fn insert(&mut self, phrase: impl Into<String>, key: impl Into<String>) {
        let phrase = phrase.into();
        let key = key.into();
        match self.index.get(&phrase) {
            Some(&pos) => self.entries[pos].1 = key,
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, key));
            }
        }
    }

    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.index
            .get(phrase)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, k)| (p.as_str(), k.as_str()))
    }

    /// Entries ordered by descending phrase length (in characters).
    ///
    /// The sort is stable: phrases of equal length keep dictionary order.
    pub fn longest_first(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by_key(|(phrase, _)| std::cmp::Reverse(phrase.chars().count()));
        entries
    }
}

impl<P: Into<String>, K: Into<String>> FromIterator<(P, K)> for PhraseDictionary {
    fn from_iter<I: IntoIterator<Item = (P, K)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (phrase, key) in iter {
            dictionary.insert(phrase, key);
        }
        dictionary
    }
}

impl Serialize for PhraseDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (phrase, key) in &self.entries {
            map.serialize_entry(phrase, key)?;
        }
        map.end()
    }
}

struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = PhraseDictionary;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping phrases to translation keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut dictionary = PhraseDictionary::new();
        while let Some((phrase, key)) = access.next_entry::<String, String>()? {
            dictionary.insert(phrase, key);
        }
        Ok(dictionary)
    }
}

impl<'de> Deserialize<'de> for PhraseDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}
