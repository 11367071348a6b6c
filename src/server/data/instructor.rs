use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::instructor::{
    AssignedCourse, Instructor, InstructorDetails, InstructorParams,
};

pub struct InstructorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all instructors with their office, ordered by last name then first name
    pub async fn get_all(&self) -> Result<Vec<Instructor>, DbErr> {
        let instructors = entity::prelude::Instructor::find()
            .find_also_related(entity::prelude::OfficeAssignment)
            .order_by_asc(entity::instructor::Column::LastName)
            .order_by_asc(entity::instructor::Column::FirstMidName)
            .all(self.db)
            .await?;

        Ok(instructors
            .into_iter()
            .map(|(instructor, office)| Instructor::from_entity(instructor, office))
            .collect())
    }

    /// Gets an instructor by ID with their office
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Instructor>, DbErr> {
        let instructor = entity::prelude::Instructor::find_by_id(id)
            .find_also_related(entity::prelude::OfficeAssignment)
            .one(self.db)
            .await?;

        Ok(instructor.map(|(instructor, office)| Instructor::from_entity(instructor, office)))
    }

    /// Gets an instructor by ID with their office and the courses they teach
    pub async fn get_details(&self, id: i32) -> Result<Option<InstructorDetails>, DbErr> {
        let Some((instructor, office)) = entity::prelude::Instructor::find_by_id(id)
            .find_also_related(entity::prelude::OfficeAssignment)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let courses = instructor
            .find_related(entity::prelude::Course)
            .find_also_related(entity::prelude::Department)
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(InstructorDetails {
            instructor: Instructor::from_entity(instructor, office),
            courses: courses
                .into_iter()
                .map(|(course, department)| AssignedCourse::from_entity(course, department))
                .collect(),
        }))
    }

    /// Creates a new instructor without office or course assignments
    pub async fn create(&self, params: InstructorParams) -> Result<Instructor, DbErr> {
        let instructor = entity::instructor::ActiveModel {
            last_name: ActiveValue::Set(params.last_name),
            first_mid_name: ActiveValue::Set(params.first_mid_name),
            hire_date: ActiveValue::Set(params.hire_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Instructor::from_entity(instructor, None))
    }

    /// Updates an instructor's name and hire date
    ///
    /// Returns None if the instructor doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: InstructorParams,
    ) -> Result<Option<Instructor>, DbErr> {
        if entity::prelude::Instructor::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        entity::instructor::ActiveModel {
            id: ActiveValue::Unchanged(id),
            last_name: ActiveValue::Set(params.last_name),
            first_mid_name: ActiveValue::Set(params.first_mid_name),
            hire_date: ActiveValue::Set(params.hire_date),
        }
        .update(self.db)
        .await?;

        self.get_by_id(id).await
    }

    /// Deletes an instructor and everything that references them.
    ///
    /// In one transaction: removes the office assignment and course assignments,
    /// clears the instructor as administrator of any department, then deletes the
    /// instructor.
    ///
    /// # Returns
    /// - `Ok(true)` - The instructor was deleted
    /// - `Ok(false)` - The instructor did not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::OfficeAssignment::delete_many()
            .filter(entity::office_assignment::Column::InstructorId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::CourseAssignment::delete_many()
            .filter(entity::course_assignment::Column::InstructorId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Department::update_many()
            .set(entity::department::ActiveModel {
                instructor_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::department::Column::InstructorId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Instructor::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
